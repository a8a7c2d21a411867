//! Bridges and articulation points of an undirected graph.
//!
//! A single low-link depth-first search computes, for every vertex `v`, its
//! discovery time `tin[v]` and `low[v]`, the smallest discovery time reachable
//! from the subtree of `v` using at most one back edge. For a tree edge
//! `v -> to`:
//! - `low[to] > tin[v]` makes `(v, to)` a bridge;
//! - `low[to] >= tin[v]` makes `v` an articulation point unless `v` is a DFS root.
//!
//! A DFS root is an articulation point iff it has more than one tree child.
//!
//! The search runs on an explicit stack of frames, so depth is bounded by heap
//! memory rather than the call stack.

use crate::graph::{EdgeId, UnGraph};

const UNVISITED: usize = usize::MAX;

/// Result of a cut-structure search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutStructure {
    /// Bridges as `(parent, child)` pairs of the DFS tree.
    pub bridges: Vec<(usize, usize)>,
    /// Articulation points in increasing id order.
    pub articulation_points: Vec<usize>,
}

impl CutStructure {
    /// Returns `true` if the edge between `u` and `v` was reported as a bridge,
    /// in either orientation.
    pub fn is_bridge(&self, u: usize, v: usize) -> bool {
        self.bridges
            .iter()
            .any(|&(a, b)| (a, b) == (u, v) || (a, b) == (v, u))
    }

    /// Returns `true` if `v` is an articulation point.
    pub fn is_articulation_point(&self, v: usize) -> bool {
        self.articulation_points.binary_search(&v).is_ok()
    }
}

/// One suspended vertex of the depth-first search.
struct Frame {
    vertex: usize,
    /// Edge the search arrived by; `None` for a DFS root.
    via: Option<EdgeId>,
    /// Next adjacency index to examine.
    cursor: usize,
    /// Number of tree children found so far.
    children: usize,
}

/// Finds all bridges and articulation points of `graph`.
///
/// Every connected component is searched, restarting from each unvisited vertex
/// in increasing id order; one discovery-time counter is shared by all of them.
/// Only the exact edge used to enter a vertex is skipped when looking for back
/// edges, so a doubled edge is never reported as a bridge.
///
/// **Time complexity**: \(O(n + m)\)
pub fn cut_structure<W>(graph: &UnGraph<W>) -> CutStructure {
    let n = graph.node_count();
    let mut tin = vec![UNVISITED; n];
    let mut low = vec![UNVISITED; n];
    let mut is_articulation = vec![false; n];
    let mut bridges = Vec::new();
    let mut timer = 0usize;
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if tin[root] != UNVISITED {
            continue;
        }
        tin[root] = timer;
        low[root] = timer;
        timer += 1;
        stack.push(Frame {
            vertex: root,
            via: None,
            cursor: 0,
            children: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;
            if let Some(adj) = graph.adjacent(v).get(frame.cursor) {
                frame.cursor += 1;
                if frame.via == Some(adj.edge) {
                    continue;
                }
                let to = adj.to;
                if tin[to] == UNVISITED {
                    tin[to] = timer;
                    low[to] = timer;
                    timer += 1;
                    stack.push(Frame {
                        vertex: to,
                        via: Some(adj.edge),
                        cursor: 0,
                        children: 0,
                    });
                } else {
                    low[v] = low[v].min(tin[to]);
                }
                continue;
            }

            // All edges of `v` examined: retreat to its parent.
            let finished = stack.pop().map_or(0, |f| f.children);
            match stack.last_mut() {
                Some(parent) => {
                    let p = parent.vertex;
                    parent.children += 1;
                    low[p] = low[p].min(low[v]);
                    if low[v] > tin[p] {
                        bridges.push((p, v));
                    }
                    if low[v] >= tin[p] && parent.via.is_some() {
                        is_articulation[p] = true;
                    }
                }
                None => {
                    if finished > 1 {
                        is_articulation[v] = true;
                    }
                }
            }
        }
    }

    let articulation_points: Vec<usize> = (0..n).filter(|&v| is_articulation[v]).collect();
    log_debug!(
        vertices = n,
        bridges = bridges.len(),
        articulation_points = articulation_points.len(),
        "cut structure computed"
    );
    CutStructure {
        bridges,
        articulation_points,
    }
}
