//! Basic graph implementations.
//!
//! This module contains the adjacency-list model that every algorithm in the
//! crate consumes.

pub mod adjacency;

pub use adjacency::{
    Adjacent, DiGraph, Directed, EdgeId, EdgeRecord, EdgeType, Graph, UnGraph, Undirected,
};
