//! Adjacency List Graph
//!
//! A graph over dense vertex ids `0..n` where every edge lives once in an edge
//! arena and each vertex keeps a list of `(neighbor, edge id)` entries.
//!
//! Keeping the edge id next to the neighbor lets traversals distinguish
//! parallel edges (the cut-edge search skips exactly the edge it arrived by)
//! and lets callers map adjacency entries back to edge weights without a
//! second lookup structure.
//!
//! Undirected edges are registered in both endpoint lists; a self-loop is
//! registered once.

use std::marker::PhantomData;

use crate::error::{GraphError, Result};
use crate::graph::compressed::CsrGraph;

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;
/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}
impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// Index of an edge in the graph's edge arena.
pub type EdgeId = usize;

/// One stored edge. For undirected graphs `from`/`to` record insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord<W> {
    /// Source endpoint.
    pub from: usize,
    /// Target endpoint.
    pub to: usize,
    /// Edge payload (`()` for unweighted graphs).
    pub weight: W,
}

/// One adjacency-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    /// Neighbor vertex id.
    pub to: usize,
    /// Arena id of the edge leading to `to`.
    pub edge: EdgeId,
}

/// An adjacency-list graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Pushes into the arena and one or two lists |
/// | `neighbors` | \(O(1)\) | Returns iterator over outgoing neighbors |
/// | `edge_list` | \(O(m)\) | Each edge once, in insertion order |
/// | `to_csr` | \(O(n + m)\) | Compressed snapshot for traversals |
#[derive(Debug, Clone)]
pub struct Graph<W = (), Ty = Directed> {
    adjacency: Vec<Vec<Adjacent>>,
    edges: Vec<EdgeRecord<W>>,
    _marker: PhantomData<Ty>,
}

/// A directed graph.
pub type DiGraph<W = ()> = Graph<W, Directed>;
/// An undirected graph.
pub type UnGraph<W = ()> = Graph<W, Undirected>;

impl<W> Graph<W, Directed> {
    /// Creates a directed graph with `n` vertices and no edges.
    pub fn new_directed(n: usize) -> Self {
        Self::with_vertices(n)
    }
}

impl<W> Graph<W, Undirected> {
    /// Creates an undirected graph with `n` vertices and no edges.
    pub fn new_undirected(n: usize) -> Self {
        Self::with_vertices(n)
    }
}

impl<W, Ty: EdgeType> Graph<W, Ty> {
    fn with_vertices(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            edges: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Builds a graph with `n` vertices from `(u, v, weight)` triples.
    ///
    /// # Panics
    /// Panics if any endpoint is out of bounds.
    pub fn from_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(n);
        for (u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Adds an edge `u -> v` (or `u -- v` for undirected graphs).
    ///
    /// Returns the id of the new edge.
    ///
    /// # Panics
    /// Panics if `u` or `v` is out of bounds.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> EdgeId {
        let n = self.node_count();
        assert!(u < n && v < n, "edge {u}->{v} is out of bounds for n={n}");
        self.push_edge(u, v, weight)
    }

    /// Checked variant of [`add_edge`](Self::add_edge).
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if either endpoint is out of bounds;
    /// the graph is left unchanged.
    pub fn try_add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<EdgeId> {
        let n = self.node_count();
        GraphError::check_vertex(u, n)?;
        GraphError::check_vertex(v, n)?;
        Ok(self.push_edge(u, v, weight))
    }

    fn push_edge(&mut self, u: usize, v: usize, weight: W) -> EdgeId {
        let edge = self.edges.len();
        self.edges.push(EdgeRecord { from: u, to: v, weight });
        self.adjacency[u].push(Adjacent { to: v, edge });
        if !Ty::is_directed() && u != v {
            self.adjacency[v].push(Adjacent { to: u, edge });
        }
        edge
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges (an undirected edge counts once).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph is directed.
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Returns the raw adjacency entries of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of bounds.
    pub fn adjacent(&self, u: usize) -> &[Adjacent] {
        &self.adjacency[u]
    }

    /// Returns the neighbors of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of bounds.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[u].iter().map(|a| a.to)
    }

    /// Returns `(neighbor, &weight)` pairs for the edges leaving `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of bounds.
    pub fn edges_from(&self, u: usize) -> impl Iterator<Item = (usize, &W)> + '_ {
        self.adjacency[u]
            .iter()
            .map(move |a| (a.to, &self.edges[a.edge].weight))
    }

    /// Returns the stored record of edge `id`.
    ///
    /// # Panics
    /// Panics if `id >= self.edge_count()`.
    pub fn edge(&self, id: EdgeId) -> &EdgeRecord<W> {
        &self.edges[id]
    }

    /// Returns the out-degree of `u` (the degree for undirected graphs).
    pub fn degree(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    /// Builds an immutable CSR snapshot of the adjacency structure.
    pub fn to_csr(&self) -> CsrGraph {
        let mut offsets = Vec::with_capacity(self.node_count() + 1);
        offsets.push(0);
        let mut targets = Vec::with_capacity(self.adjacency.iter().map(Vec::len).sum());
        for list in &self.adjacency {
            targets.extend(list.iter().map(|a| a.to));
            offsets.push(targets.len());
        }
        CsrGraph::from_csr_parts(offsets, targets)
    }
}

impl<W: Copy, Ty: EdgeType> Graph<W, Ty> {
    /// Returns every edge once as `(from, to, weight)`, in insertion order.
    pub fn edge_list(&self) -> Vec<(usize, usize, W)> {
        self.edges.iter().map(|e| (e.from, e.to, e.weight)).collect()
    }
}
