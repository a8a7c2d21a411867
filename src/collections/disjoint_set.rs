//! Disjoint Set (Union-Find) implementation.
//!
//! Kruskal's algorithm only needs two operations from a union-find, so they are
//! captured by the [`UnionFind`] trait and any structure providing them can be
//! plugged in. [`DisjointSet`] is the default implementation.
//!
//! # Performance
//!
//! - Uses `Cell<usize>` for parent pointers so `find` can compress paths
//!   through a shared reference.
//! - Path compression and union-by-rank give nearly constant amortized time.

use std::cell::Cell;

/// The two union-find operations Kruskal's algorithm depends on.
pub trait UnionFind {
    /// Returns the representative of the set containing `x`.
    fn find(&self, x: usize) -> usize;

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `true` iff they were in different sets before the call.
    fn union(&mut self, a: usize, b: usize) -> bool;
}

/// A Disjoint Set (Union-Find) data structure over elements `0..len`.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers.
    /// Uses `Cell` to allow path compression with shared reference.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
    /// Number of disjoint sets currently tracked.
    sets: usize,
}

impl DisjointSet {
    /// Creates a disjoint set with `len` singleton sets `{0}, {1}, ..., {len - 1}`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).map(Cell::new).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id >= self.len()`.
    pub fn find(&self, id: usize) -> usize {
        assert!(id < self.len(), "element {id} out of bounds for len={}", self.len());

        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let next = self.parent[curr].get();
            self.parent[curr].set(root);
            curr = next;
        }

        root
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    ///
    /// # Panics
    /// Panics if either id is out of bounds.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        let root1 = self.find(id1);
        let root2 = self.find(id2);

        if root1 == root2 {
            return false;
        }

        let rank1 = self.rank[root1];
        let rank2 = self.rank[root2];

        if rank1 < rank2 {
            self.parent[root1].set(root2);
        } else if rank1 > rank2 {
            self.parent[root2].set(root1);
        } else {
            self.parent[root2].set(root1);
            self.rank[root1] = rank1.saturating_add(1);
        }

        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl UnionFind for DisjointSet {
    fn find(&self, x: usize) -> usize {
        DisjointSet::find(self, x)
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        DisjointSet::union(self, a, b)
    }
}
