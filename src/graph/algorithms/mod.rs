//! Analytical graph queries.
//!
//! Each submodule answers one family of questions against a graph built by the
//! caller. Queries never mutate the input graph; every working array is owned by
//! the call that creates it.

pub mod connectivity;
pub mod flow;
pub mod lca;
pub mod mst;
pub mod scc;
pub mod shortest_path;
pub mod traversal;

pub use connectivity::{cut_structure, CutStructure};
pub use flow::{FlowNetwork, MinCut};
pub use lca::Lca;
pub use mst::{kruskal, kruskal_with, SpanningForest};
pub use scc::StronglyConnectedComponents;
pub use shortest_path::{
    bellman_ford, dijkstra, distance_matrix, floyd_warshall, has_negative_cycle, ShortestPaths,
};
pub use traversal::{bfs_levels, dfs_postorder, is_acyclic, topological_sort};
