//! Supporting collections used by the graph algorithms.
//!
//! Currently this is the union-find structure consumed by Kruskal's algorithm.

pub mod disjoint_set;

pub use disjoint_set::{DisjointSet, UnionFind};
