//! Graph representations and the algorithms that run over them.
//!
//! Graph code is organized into categories:
//! - `basic`: the mutable-at-build-time adjacency model callers construct
//! - `compressed`: immutable CSR snapshots used as traversal substrates
//! - `algorithms`: the analytical queries

pub mod algorithms;
pub mod basic;
pub mod compressed;

pub use basic::{
    Adjacent, DiGraph, Directed, EdgeId, EdgeRecord, EdgeType, Graph, UnGraph, Undirected,
};
pub use compressed::CsrGraph;
