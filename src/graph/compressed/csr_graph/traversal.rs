//! CSR graph traversal algorithms.
//!
//! Both traversals use explicit stacks, so their memory use is heap
//! bound rather than call-stack bound regardless of graph shape.

use crate::graph::compressed::csr_graph::CsrGraph;

impl CsrGraph {
    /// Finishing order of a depth-first search over the whole graph.
    ///
    /// Roots are tried in increasing id order and neighbors in adjacency order,
    /// so the result equals that of the textbook recursive formulation. A node
    /// is emitted only after every node reachable through it has been emitted.
    ///
    /// **Time complexity**: \(O(n + m)\)
    pub fn postorder(&self) -> Vec<usize> {
        let n = self.node_count();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        // (node, next offset into `targets`)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, self.offsets[root]));

            while let Some(top) = stack.last_mut() {
                let u = top.0;
                if top.1 < self.offsets[u + 1] {
                    let v = self.targets[top.1];
                    top.1 += 1;
                    if !visited[v] {
                        visited[v] = true;
                        stack.push((v, self.offsets[v]));
                    }
                } else {
                    stack.pop();
                    order.push(u);
                }
            }
        }

        order
    }

    /// Labels every node reachable from `start` through unlabeled nodes.
    ///
    /// Nodes whose entry in `labels` is already `Some` act as walls. Newly
    /// labeled nodes receive `label` and are appended to `members`. Returns the
    /// number of nodes labeled by this call.
    ///
    /// # Panics
    /// Panics if `start` is out of bounds or `labels` is shorter than `node_count()`.
    pub fn reach_from(
        &self,
        start: usize,
        label: usize,
        labels: &mut [Option<usize>],
        members: &mut Vec<usize>,
    ) -> usize {
        assert!(start < self.node_count(), "start {start} out of bounds");
        assert!(
            labels.len() >= self.node_count(),
            "label buffer too small for node_count"
        );

        if labels[start].is_some() {
            return 0;
        }

        let before = members.len();
        let mut stack = vec![start];
        labels[start] = Some(label);

        while let Some(u) = stack.pop() {
            members.push(u);
            for &v in self.neighbor_slice(u) {
                if labels[v].is_none() {
                    labels[v] = Some(label);
                    stack.push(v);
                }
            }
        }

        members.len() - before
    }
}
