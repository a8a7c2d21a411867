//! # `trellis` - Canonical Graph Algorithms
//!
//! A toolkit of classic graph algorithms operating over an explicit, dense,
//! in-memory graph representation. A caller builds a graph once and then issues
//! read-only analytical queries against it.
//!
//! ## Key Features
//!
//! - **Graph model**: adjacency lists over dense vertex ids `0..n`, directed or
//!   undirected, weighted or unweighted, with an edge arena for stable edge ids
//! - **Traversal**: Kahn topological order, BFS levels, DFS finishing order
//! - **Ancestors**: binary-lifted LCA over a rooted tree
//! - **Shortest paths**: Dijkstra, Bellman-Ford (negative cycle detection),
//!   Floyd-Warshall
//! - **Spanning forests**: Kruskal over a pluggable union-find
//! - **Connectivity**: bridges and articulation points
//! - **Strong connectivity**: Kosaraju with condensation
//! - **Maximum flow**: Dinic's blocking flow with min-cut extraction
//!
//! ## Robustness
//!
//! Every depth-first traversal (cut edges, SCC, Dinic's augmenting search) runs
//! on an explicit stack, so path-shaped graphs with hundreds of thousands of
//! vertices do not exhaust the call stack.
//!
//! ## Error Model
//!
//! - Caller bugs on the infallible API (vertex id out of range, negative
//!   capacity) panic with an explicit message; each such function has a
//!   `# Panics` section.
//! - Detected inconsistencies (a reachable negative cycle) are returned as
//!   [`GraphError`].
//! - Structural non-answers (a partial topological order, a lift past the
//!   root) are partial results or `None`.
//!
//! ## Example
//!
//! ```rust
//! use trellis::graph::algorithms::flow::FlowNetwork;
//! use trellis::graph::algorithms::mst::kruskal;
//!
//! let forest = kruskal(4, &[(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8)]);
//! assert_eq!(forest.total_weight, 8);
//!
//! let mut net = FlowNetwork::new(4);
//! net.add_edge(0, 1, 3);
//! net.add_edge(0, 2, 2);
//! net.add_edge(1, 2, 1);
//! net.add_edge(1, 3, 2);
//! net.add_edge(2, 3, 3);
//! assert_eq!(net.max_flow(0, 3), 5);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{DisjointSet, UnionFind};
pub use error::{GraphError, Result};
pub use graph::{CsrGraph, DiGraph, Directed, EdgeId, Graph, UnGraph, Undirected};

/// Distance sentinel meaning "no path known".
///
/// Larger than any sum of at most `n` real edge weights for the graph sizes in
/// scope, and small enough that adding one more edge weight cannot overflow
/// `i64`. Used by BFS levels, Dijkstra, Bellman-Ford and Floyd-Warshall.
pub const UNREACHED: i64 = 1 << 60;

const _: () = {
    // Two sentinels plus headroom must still fit.
    assert!(UNREACHED.checked_mul(4).is_some());
};
