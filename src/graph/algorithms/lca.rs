//! Lowest common ancestors via binary lifting.
//!
//! `up[k][v]` holds the ancestor of `v` at distance `2^k`, so any ancestor is
//! reachable in `O(log n)` jumps. The table is built once for a fixed root;
//! querying relative to a different root requires building a new [`Lca`].

use crate::graph::{EdgeType, Graph};

/// Table entry for "no ancestor at this distance".
const NO_ANCESTOR: usize = usize::MAX;

/// Binary-lifted ancestor table over a rooted tree.
///
/// The input graph is treated as an undirected tree (or forest) and explored
/// from `root`; for a directed graph only edges pointing away from the root are
/// followed. Vertices not reachable from `root` have no ancestors and share no
/// common ancestor with anything but themselves.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new` | \(O(n \log n)\) |
/// | `lift` | \(O(\log n)\) |
/// | `query` | \(O(\log n)\) |
#[derive(Debug, Clone)]
pub struct Lca {
    root: usize,
    up: Vec<Vec<usize>>,
    depth: Vec<usize>,
}

impl Lca {
    /// Builds the ancestor table for the tree containing `root`.
    ///
    /// # Panics
    /// Panics if `root` is out of bounds.
    pub fn new<W, Ty: EdgeType>(tree: &Graph<W, Ty>, root: usize) -> Self {
        let n = tree.node_count();
        assert!(root < n, "root {root} out of bounds for n={n}");

        // Smallest L with 2^L > n, so every depth < n fits in L bits.
        let levels = (usize::BITS - n.leading_zeros()).max(1) as usize;
        let mut up = vec![vec![NO_ANCESTOR; n]; levels];
        let mut depth = vec![0usize; n];
        let mut seen = vec![false; n];

        // Iterative exploration; `up[0]` doubles as the parent array.
        let mut stack = vec![root];
        seen[root] = true;
        while let Some(u) = stack.pop() {
            for v in tree.neighbors(u) {
                if !seen[v] {
                    seen[v] = true;
                    up[0][v] = u;
                    depth[v] = depth[u] + 1;
                    stack.push(v);
                }
            }
        }

        for k in 1..levels {
            for v in 0..n {
                let mid = up[k - 1][v];
                up[k][v] = if mid == NO_ANCESTOR {
                    NO_ANCESTOR
                } else {
                    up[k - 1][mid]
                };
            }
        }

        log_debug!(vertices = n, root, levels, "lca table built");
        Self { root, up, depth }
    }

    /// The root the table was built from.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns `true` if `v` lies in the root's tree.
    pub fn is_reachable(&self, v: usize) -> bool {
        v == self.root || self.up[0][v] != NO_ANCESTOR
    }

    /// Distance from the root, or `None` if `v` is not in the root's tree.
    pub fn depth(&self, v: usize) -> Option<usize> {
        self.is_reachable(v).then(|| self.depth[v])
    }

    /// Direct parent of `v`, or `None` for the root and unreachable vertices.
    pub fn parent(&self, v: usize) -> Option<usize> {
        let p = self.up[0][v];
        (p != NO_ANCESTOR).then_some(p)
    }

    /// Walks `v` upward exactly `d` steps.
    ///
    /// For each set bit `k` of `d`, `v` jumps to `up[k][v]`. Returns `None` if
    /// the walk passes the root.
    pub fn lift(&self, mut v: usize, d: usize) -> Option<usize> {
        if d >= 1 << self.up.len() {
            return None;
        }
        for (k, row) in self.up.iter().enumerate() {
            if d & (1 << k) != 0 {
                v = row[v];
                if v == NO_ANCESTOR {
                    return None;
                }
            }
        }
        Some(v)
    }

    /// Lowest common ancestor of `a` and `b`.
    ///
    /// Returns `None` when `a` and `b` are distinct and do not share a tree
    /// with the root. `query(a, a)` is always `Some(a)`.
    pub fn query(&self, a: usize, b: usize) -> Option<usize> {
        if a == b {
            return Some(a);
        }
        if !self.is_reachable(a) || !self.is_reachable(b) {
            return None;
        }

        let (mut a, mut b) = if self.depth[a] < self.depth[b] {
            (b, a)
        } else {
            (a, b)
        };
        a = self.lift(a, self.depth[a] - self.depth[b])?;
        if a == b {
            return Some(a);
        }

        for row in self.up.iter().rev() {
            if row[a] != row[b] {
                a = row[a];
                b = row[b];
            }
        }
        self.parent(a)
    }

    /// Number of edges on the tree path between `a` and `b`.
    pub fn distance(&self, a: usize, b: usize) -> Option<usize> {
        let c = self.query(a, b)?;
        Some(self.depth[a] + self.depth[b] - 2 * self.depth[c])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    //        0
    //      /   \
    //     1     2
    //    / \     \
    //   3   4     5
    //   |
    //   6
    fn sample_tree() -> UnGraph {
        UnGraph::<()>::from_edges(
            8,
            [(0, 1, ()), (0, 2, ()), (1, 3, ()), (1, 4, ()), (2, 5, ()), (3, 6, ())],
        )
    }

    #[test]
    fn test_depth_and_parent() {
        let lca = Lca::new(&sample_tree(), 0);
        assert_eq!(lca.depth(0), Some(0));
        assert_eq!(lca.depth(6), Some(3));
        assert_eq!(lca.parent(6), Some(3));
        assert_eq!(lca.parent(0), None);
        // Vertex 7 is isolated.
        assert_eq!(lca.depth(7), None);
    }

    #[test]
    fn test_lift() {
        let lca = Lca::new(&sample_tree(), 0);
        assert_eq!(lca.lift(6, 0), Some(6));
        assert_eq!(lca.lift(6, 1), Some(3));
        assert_eq!(lca.lift(6, 3), Some(0));
        assert_eq!(lca.lift(6, 4), None);
        assert_eq!(lca.lift(6, 1 << 20), None);
    }

    #[test]
    fn test_query() {
        let lca = Lca::new(&sample_tree(), 0);
        assert_eq!(lca.query(6, 4), Some(1));
        assert_eq!(lca.query(4, 6), Some(1));
        assert_eq!(lca.query(6, 5), Some(0));
        assert_eq!(lca.query(3, 6), Some(3));
        assert_eq!(lca.query(2, 2), Some(2));
        assert_eq!(lca.query(7, 7), Some(7));
        assert_eq!(lca.query(7, 0), None);
        assert_eq!(lca.distance(6, 5), Some(5));
        assert_eq!(lca.distance(4, 4), Some(0));
    }

    #[test]
    fn test_different_root_changes_answers() {
        let tree = sample_tree();
        let lca = Lca::new(&tree, 3);
        assert_eq!(lca.root(), 3);
        assert_eq!(lca.query(0, 4), Some(1));
        assert_eq!(lca.query(6, 5), Some(3));
    }

    #[test]
    fn test_single_vertex() {
        let lca = Lca::new(&UnGraph::<()>::new_undirected(1), 0);
        assert_eq!(lca.query(0, 0), Some(0));
        assert_eq!(lca.lift(0, 1), None);
    }

    #[test]
    fn test_deep_path() {
        let n = 100_000;
        let path = UnGraph::<()>::from_edges(n, (1..n).map(|i| (i - 1, i, ())));
        let lca = Lca::new(&path, 0);
        assert_eq!(lca.depth(n - 1), Some(n - 1));
        assert_eq!(lca.query(n - 1, n / 2), Some(n / 2));
        assert_eq!(lca.lift(n - 1, n - 1), Some(0));
    }
}
