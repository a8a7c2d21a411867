//! Weighted shortest paths: Dijkstra, Bellman-Ford and Floyd-Warshall.
//!
//! All three share the [`UNREACHED`] sentinel for "no path known". Weights are
//! `i64`; the sentinel leaves enough headroom that adding one more edge weight
//! to a finite distance cannot overflow.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{GraphError, Result};
use crate::graph::{EdgeType, Graph};
use crate::UNREACHED;

/// Single-source distances plus the shortest-path tree that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    /// Source vertex.
    pub source: usize,
    /// `dist[v]` is the shortest distance to `v`, or [`UNREACHED`].
    pub dist: Vec<i64>,
    /// `parent[v]` is the predecessor of `v` on a shortest path.
    pub parent: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Shortest distance to `v`, or `None` if `v` is unreachable.
    pub fn distance(&self, v: usize) -> Option<i64> {
        let d = self.dist[v];
        (d != UNREACHED).then_some(d)
    }

    /// Vertices on a shortest path from the source to `v`, both inclusive.
    ///
    /// Returns `None` if `v` is unreachable.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.distance(v)?;
        let mut path = vec![v];
        let mut cur = v;
        while let Some(p) = self.parent[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm from `src`.
///
/// Precondition: every edge weight is non-negative. Negative weights are not
/// detected and produce unspecified distances; use [`bellman_ford`] instead.
///
/// Entries popped from the frontier whose key no longer matches the current
/// best distance are stale and skipped, giving \(O((n + m) \log n)\).
///
/// # Panics
/// Panics if `src` is out of bounds.
pub fn dijkstra<Ty: EdgeType>(graph: &Graph<i64, Ty>, src: usize) -> ShortestPaths {
    let n = graph.node_count();
    assert!(src < n, "source {src} out of bounds for n={n}");

    let mut dist = vec![UNREACHED; n];
    let mut parent = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[src] = 0;
    heap.push(Reverse((0i64, src)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if d != dist[u] {
            continue;
        }
        for (v, &w) in graph.edges_from(u) {
            let nd = d + w;
            if nd < dist[v] {
                dist[v] = nd;
                parent[v] = Some(u);
                heap.push(Reverse((nd, v)));
            }
        }
    }

    log_debug!(
        vertices = n,
        source = src,
        reached = dist.iter().filter(|&&d| d != UNREACHED).count(),
        "dijkstra finished"
    );
    ShortestPaths {
        source: src,
        dist,
        parent,
    }
}

/// Bellman-Ford over an edge list of directed `(from, to, weight)` arcs.
///
/// Runs at most `n - 1` relaxation passes, stopping early after a pass with no
/// update. One extra pass then checks for a negative cycle reachable from
/// `src`. Unreachable vertices get [`UNREACHED`].
///
/// **Time complexity**: \(O(n \cdot m)\)
///
/// # Errors
/// Returns [`GraphError::NegativeCycle`] if a negative cycle is reachable from `src`.
///
/// # Panics
/// Panics if `src` or any edge endpoint is out of bounds.
pub fn bellman_ford(n: usize, edges: &[(usize, usize, i64)], src: usize) -> Result<Vec<i64>> {
    assert!(src < n, "source {src} out of bounds for n={n}");
    for &(u, v, _) in edges {
        assert!(u < n && v < n, "edge {u}->{v} is out of bounds for n={n}");
    }

    let mut dist = vec![UNREACHED; n];
    dist[src] = 0;

    for _ in 0..n.saturating_sub(1) {
        let mut updated = false;
        for &(u, v, w) in edges {
            if dist[u] == UNREACHED {
                continue;
            }
            let nd = dist[u] + w;
            if nd < dist[v] {
                dist[v] = nd;
                updated = true;
            }
        }
        log_trace!(updated, "bellman-ford relaxation pass");
        if !updated {
            break;
        }
    }

    let relaxable = edges
        .iter()
        .any(|&(u, v, w)| dist[u] != UNREACHED && dist[u] + w < dist[v]);
    if relaxable {
        log_debug!(vertices = n, source = src, "bellman-ford found a negative cycle");
        return Err(GraphError::NegativeCycle);
    }

    Ok(dist)
}

/// Floyd-Warshall all-pairs shortest paths on a dense `n x n` matrix.
///
/// `dist[i][j]` starts as the direct edge weight, [`UNREACHED`] if there is no
/// edge (and normally 0 on the diagonal). The intermediate vertex `k` is the
/// outermost loop. Relaxations through an unreached leg are skipped rather
/// than summing sentinels.
///
/// After convergence, a negative diagonal entry means vertex `i` lies on a
/// negative cycle (see [`has_negative_cycle`]). Entries affected by a negative
/// cycle are not shortest distances; they are clamped at `-UNREACHED` so the
/// sums never overflow.
///
/// **Time complexity**: \(O(n^3)\)
///
/// # Panics
/// Panics if the matrix is not square.
pub fn floyd_warshall(mut dist: Vec<Vec<i64>>) -> Vec<Vec<i64>> {
    let n = dist.len();
    assert!(
        dist.iter().all(|row| row.len() == n),
        "distance matrix must be {n}x{n}"
    );

    for k in 0..n {
        // Row `k` is read while every row, including `k` itself, is written.
        let via = dist[k].clone();
        for row in &mut dist {
            let dik = row[k];
            if dik >= UNREACHED {
                continue;
            }
            for (j, &dkj) in via.iter().enumerate() {
                if dkj >= UNREACHED {
                    continue;
                }
                // Negative cycles drive sums down each pass; the floor keeps them in range.
                let nd = (dik + dkj).max(-UNREACHED);
                if nd < row[j] {
                    row[j] = nd;
                }
            }
        }
    }

    log_debug!(vertices = n, "floyd-warshall finished");
    dist
}

/// Builds the initial Floyd-Warshall matrix for `graph`.
///
/// The diagonal is 0, parallel edges keep the cheapest weight, and missing
/// edges are [`UNREACHED`].
pub fn distance_matrix<Ty: EdgeType>(graph: &Graph<i64, Ty>) -> Vec<Vec<i64>> {
    let n = graph.node_count();
    let mut dist = vec![vec![UNREACHED; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0;
    }
    for u in 0..n {
        for (v, &w) in graph.edges_from(u) {
            if w < dist[u][v] {
                dist[u][v] = w;
            }
        }
    }
    dist
}

/// Returns `true` if a converged Floyd-Warshall matrix has a negative diagonal
/// entry, i.e. some vertex lies on a negative cycle.
pub fn has_negative_cycle(dist: &[Vec<i64>]) -> bool {
    dist.iter().enumerate().any(|(i, row)| row[i] < 0)
}
