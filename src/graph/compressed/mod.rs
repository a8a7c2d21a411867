//! Compressed graph implementations.
//!
//! A CSR snapshot stores all adjacency targets in one contiguous buffer, which
//! keeps the inner loops of the traversal-heavy algorithms cache friendly.

pub mod csr_graph;

pub use csr_graph::CsrGraph;
