//! A compact CSR (compressed sparse row) graph snapshot.
//!
//! CSR is the standard sparse matrix format for graphs, storing edges in row-major order.
//! This provides efficient access to outgoing edges and cheap construction of the
//! transpose, which Kosaraju's algorithm needs.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous `usize` targets for each row

mod traversal;


/// An immutable CSR graph.
///
/// Visited state is never stored in the graph itself; each traversal owns its
/// own scratch buffers, so a snapshot can be queried any number of times.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_csr_parts` | \(O(n + m)\) | Validates offsets and targets |
/// | `neighbors` | \(O(1)\) | Returns slice over outgoing neighbors |
/// | `in_degrees` | \(O(n + m)\) | One pass over all targets |
/// | `transpose` | \(O(n + m)\) | Counting sort by target |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl CsrGraph {
    /// Builds a CSR graph directly from CSR parts.
    ///
    /// # Panics
    /// - if `offsets` is empty or does not start at 0
    /// - if offsets are not monotone
    /// - if `offsets.last() != targets.len()`
    /// - if any target is out of bounds
    pub fn from_csr_parts(offsets: Vec<usize>, targets: Vec<usize>) -> Self {
        assert!(
            offsets.first() == Some(&0),
            "offsets must have length n+1 and start at 0"
        );
        let n = offsets.len() - 1;
        for w in offsets.windows(2) {
            assert!(w[0] <= w[1], "offsets must be monotone");
        }
        assert!(
            offsets[n] == targets.len(),
            "offsets last must equal targets length"
        );
        for &v in &targets {
            assert!(v < n, "edge to {v} out of bounds for n={n}");
        }

        Self { offsets, targets }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len() - 1
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Returns the out-neighbors of `node` as a contiguous slice.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    #[inline]
    pub fn neighbor_slice(&self, node: usize) -> &[usize] {
        assert!(node < self.node_count(), "node {node} out of bounds");
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Returns the out-neighbors of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbor_slice(node).iter().copied()
    }

    /// Returns the in-degree of every node.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut indeg = vec![0usize; self.node_count()];
        for &v in &self.targets {
            indeg[v] += 1;
        }
        indeg
    }

    /// Returns the transposed graph (every edge `u -> v` becomes `v -> u`).
    ///
    /// Within each row of the result, sources appear in increasing order.
    pub fn transpose(&self) -> Self {
        let n = self.node_count();
        let indeg = self.in_degrees();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut acc = 0usize;
        for d in &indeg {
            acc += d;
            offsets.push(acc);
        }

        let mut cursor = offsets[..n].to_vec();
        let mut targets = vec![0usize; self.targets.len()];
        for u in 0..n {
            for &v in self.neighbor_slice(u) {
                targets[cursor[v]] = u;
                cursor[v] += 1;
            }
        }

        Self { offsets, targets }
    }
}
