//! Minimum spanning forests with Kruskal's algorithm.
//!
//! Cycle detection is delegated to a [`UnionFind`] implementation; the crate's
//! [`DisjointSet`] is used unless the caller supplies another one.

use crate::collections::{DisjointSet, UnionFind};

/// A minimum spanning forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    /// Sum of the chosen edge weights.
    pub total_weight: i64,
    /// Chosen edges as `(u, v, weight)`, in the order they were accepted.
    pub edges: Vec<(usize, usize, i64)>,
}

impl SpanningForest {
    /// Number of trees in the forest for a graph with `n` vertices.
    pub fn component_count(&self, n: usize) -> usize {
        n - self.edges.len()
    }

    /// Returns `true` if the forest is a single spanning tree over `n` vertices.
    pub fn is_spanning_tree(&self, n: usize) -> bool {
        n > 0 && self.component_count(n) == 1
    }
}

/// Kruskal's algorithm over `n` vertices and undirected `(u, v, weight)` edges.
///
/// Edges are sorted ascending by weight with a stable sort, so equal-weight
/// edges are considered in input order. For a disconnected graph the result is
/// a minimum spanning forest.
///
/// **Time complexity**: \(O(m \log m)\)
///
/// # Panics
/// Panics if any endpoint is out of bounds.
pub fn kruskal(n: usize, edges: &[(usize, usize, i64)]) -> SpanningForest {
    kruskal_with(&mut DisjointSet::new(n), edges)
}

/// Kruskal's algorithm using a caller-provided union-find over the vertex ids.
///
/// An edge is accepted iff `uf.union(u, v)` reports its endpoints were in
/// different sets. Sets already merged in `uf` before the call are respected,
/// which lets callers force edges into the forest.
pub fn kruskal_with<U: UnionFind + ?Sized>(
    uf: &mut U,
    edges: &[(usize, usize, i64)],
) -> SpanningForest {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|&(_, _, w)| w);

    let mut forest = SpanningForest {
        total_weight: 0,
        edges: Vec::new(),
    };
    for (u, v, w) in sorted {
        if uf.union(u, v) {
            forest.total_weight += w;
            forest.edges.push((u, v, w));
        }
    }

    log_debug!(
        candidates = edges.len(),
        chosen = forest.edges.len(),
        total_weight = forest.total_weight,
        "kruskal finished"
    );
    forest
}
