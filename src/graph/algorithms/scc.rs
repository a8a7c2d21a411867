//! Strongly connected components with Kosaraju's two-pass algorithm.
//!
//! 1. A depth-first search over the graph records every vertex's finishing order.
//! 2. Vertices are taken in reverse finishing order; each one not yet assigned
//!    starts a search over the transposed graph, and everything it reaches
//!    (through unassigned vertices) becomes a new component.
//!
//! Both passes run on the explicit-stack traversals of [`CsrGraph`].
//!
//! [`CsrGraph`]: crate::graph::CsrGraph

use crate::graph::DiGraph;

/// The strongly connected components of a directed graph.
///
/// Component ids are assigned in order of discovery during the second pass.
/// That order is a topological order of the condensation: every edge between
/// two different components goes from a lower id to a higher id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnectedComponents {
    component_of: Vec<usize>,
    components: Vec<Vec<usize>>,
    condensation_edges: Vec<(usize, usize)>,
}

impl StronglyConnectedComponents {
    /// Decomposes `graph` into strongly connected components.
    ///
    /// **Time complexity**: \(O(n + m)\)
    pub fn new<W>(graph: &DiGraph<W>) -> Self {
        let csr = graph.to_csr();
        let n = csr.node_count();
        let finish = csr.postorder();
        let transpose = csr.transpose();

        let mut labels: Vec<Option<usize>> = vec![None; n];
        let mut components: Vec<Vec<usize>> = Vec::new();
        for &v in finish.iter().rev() {
            if labels[v].is_some() {
                continue;
            }
            let mut members = Vec::new();
            transpose.reach_from(v, components.len(), &mut labels, &mut members);
            components.push(members);
        }

        // Every vertex is labeled: each one is either labeled earlier or starts its own search.
        let component_of: Vec<usize> = labels.into_iter().flatten().collect();
        debug_assert_eq!(component_of.len(), n);

        let mut condensation_edges: Vec<(usize, usize)> = (0..n)
            .flat_map(|u| csr.neighbor_slice(u).iter().map(move |&v| (u, v)))
            .map(|(u, v)| (component_of[u], component_of[v]))
            .filter(|(a, b)| a != b)
            .collect();
        condensation_edges.sort_unstable();
        condensation_edges.dedup();

        log_debug!(
            vertices = n,
            components = components.len(),
            "strongly connected components computed"
        );
        Self {
            component_of,
            components,
            condensation_edges,
        }
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// Component id of vertex `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn component_of(&self, v: usize) -> usize {
        self.component_of[v]
    }

    /// Component id of every vertex, indexed by vertex.
    pub fn component_ids(&self) -> &[usize] {
        &self.component_of
    }

    /// Members of every component, indexed by component id.
    pub fn components(&self) -> &[Vec<usize>] {
        &self.components
    }

    /// Returns `true` if `a` and `b` are mutually reachable.
    pub fn same_component(&self, a: usize, b: usize) -> bool {
        self.component_of[a] == self.component_of[b]
    }

    /// The condensation: one vertex per component and one edge per pair of
    /// components joined by at least one original edge. Always acyclic.
    pub fn condensation(&self) -> DiGraph {
        DiGraph::<()>::from_edges(
            self.count(),
            self.condensation_edges.iter().map(|&(a, b)| (a, b, ())),
        )
    }
}
