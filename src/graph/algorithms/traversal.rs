//! Unweighted traversals: topological order, BFS levels and DFS finishing order.

use std::collections::VecDeque;

use crate::graph::{DiGraph, EdgeType, Graph};
use crate::UNREACHED;

/// Computes a topological ordering using Kahn's algorithm.
///
/// Vertices with in-degree zero are emitted first-in first-out, starting with
/// the initial sources in increasing id order. This tie-break policy is the
/// only one this function commits to.
///
/// If the graph has a cycle, the vertices on or downstream of the cycle are
/// never emitted and the result is shorter than `node_count()`. Callers detect
/// cycles by comparing lengths (see [`is_acyclic`]).
///
/// **Time complexity**: \(O(n + m)\)
pub fn topological_sort<W>(graph: &DiGraph<W>) -> Vec<usize> {
    let csr = graph.to_csr();
    let n = csr.node_count();
    let mut indeg = csr.in_degrees();

    let mut queue: VecDeque<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in csr.neighbor_slice(u) {
            indeg[v] -= 1;
            if indeg[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    log_debug!(
        vertices = n,
        emitted = order.len(),
        "topological sort finished"
    );
    order
}

/// Returns `true` if the directed graph has no cycle.
pub fn is_acyclic<W>(graph: &DiGraph<W>) -> bool {
    topological_sort(graph).len() == graph.node_count()
}

/// Unweighted shortest distances (hop counts) from `src`.
///
/// Vertices not reachable from `src` get [`UNREACHED`]. Each vertex and edge is
/// examined at most once.
///
/// # Panics
/// Panics if `src` is out of bounds.
pub fn bfs_levels<W, Ty: EdgeType>(graph: &Graph<W, Ty>, src: usize) -> Vec<i64> {
    let n = graph.node_count();
    assert!(src < n, "source {src} out of bounds for n={n}");

    let mut dist = vec![UNREACHED; n];
    let mut queue = VecDeque::new();
    dist[src] = 0;
    queue.push_back(src);

    while let Some(u) = queue.pop_front() {
        let next = dist[u] + 1;
        for v in graph.neighbors(u) {
            if dist[v] == UNREACHED {
                dist[v] = next;
                queue.push_back(v);
            }
        }
    }

    dist
}

/// Finishing order of a depth-first search over every vertex of the graph.
///
/// Roots are tried in increasing id order. Runs on an explicit stack.
pub fn dfs_postorder<W, Ty: EdgeType>(graph: &Graph<W, Ty>) -> Vec<usize> {
    graph.to_csr().postorder()
}
