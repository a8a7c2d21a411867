//! Error types for graph construction and queries.
//!
//! Only conditions a caller can reasonably branch on are represented here.
//! Precondition violations on the infallible API (out-of-range ids passed to
//! [`Graph::add_edge`](crate::Graph::add_edge), negative capacities) panic
//! instead, and structural non-answers such as a partial topological order are
//! returned as ordinary values.

use thiserror::Error;

/// Result type for fallible graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors reported by the checked graph API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex id outside `0..len` was supplied.
    #[error("vertex {vertex} is out of bounds for a graph with {len} vertices")]
    VertexOutOfBounds {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        len: usize,
    },

    /// Bellman-Ford found a negative cycle reachable from the source, so no
    /// finite shortest-path distances exist.
    #[error("negative cycle reachable from the source")]
    NegativeCycle,
}

impl GraphError {
    /// Returns `Ok(())` if `vertex < len`, otherwise `VertexOutOfBounds`.
    pub(crate) fn check_vertex(vertex: usize, len: usize) -> Result<()> {
        if vertex < len {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds { vertex, len })
        }
    }
}
