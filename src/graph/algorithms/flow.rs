//! Maximum flow with Dinic's blocking-flow algorithm.
//!
//! Arcs live in one contiguous arena. Each call to [`FlowNetwork::add_edge`]
//! pushes a forward arc and its reverse residual arc next to each other, and
//! each record stores the id of its partner, so pushing flow along an arc and
//! crediting its partner are two indexed updates.
//!
//! Invariant: for every arc pair, `forward.residual + reverse.residual` equals
//! the pair's total capacity at all times.
//!
//! One phase of the algorithm:
//! 1. BFS from the source over arcs with positive residual capacity assigns a
//!    level to every reachable vertex. If the sink is unreached, the current
//!    flow is maximum.
//! 2. Repeated depth-first searches that only follow arcs advancing exactly one
//!    level push augmenting paths until none remain (a blocking flow). Each
//!    vertex keeps a cursor to the next arc worth trying, reset every phase, so
//!    exhausted arcs are not revisited within the phase.
//!
//! Levels strictly increase between phases, bounding the phase count by `n`
//! and the total work by \(O(n^2 m)\).

use std::collections::VecDeque;

use crate::graph::EdgeId;

const NO_LEVEL: usize = usize::MAX;

/// One residual arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Arc {
    to: usize,
    /// Id of the paired arc in the opposite direction.
    rev: EdgeId,
    /// Remaining capacity.
    residual: i64,
    /// Capacity the arc was created with.
    capacity: i64,
}

/// A minimum cut read off the final residual network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    /// `source_side[v]` is `true` iff `v` is reachable from the source in the
    /// residual network.
    pub source_side: Vec<bool>,
    /// Saturated arcs (as ids returned by `add_edge`) crossing from the source
    /// side to the sink side.
    pub cut_edges: Vec<EdgeId>,
    /// Total original capacity of `cut_edges`.
    pub capacity: i64,
}

/// A capacitated directed network with a residual arc per edge.
#[derive(Debug, Clone, Default)]
pub struct FlowNetwork {
    arcs: Vec<Arc>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl FlowNetwork {
    /// Creates a network with `n` vertices and no arcs.
    pub fn new(n: usize) -> Self {
        Self {
            arcs: Vec::new(),
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added (each edge owns two arcs).
    pub fn edge_count(&self) -> usize {
        self.arcs.len() / 2
    }

    fn push_pair(&mut self, u: usize, v: usize, forward: i64, backward: i64) -> EdgeId {
        let n = self.node_count();
        assert!(u < n && v < n, "edge {u}->{v} is out of bounds for n={n}");
        assert!(
            forward >= 0 && backward >= 0,
            "capacity of edge {u}->{v} must be non-negative"
        );

        let id = self.arcs.len();
        self.arcs.push(Arc {
            to: v,
            rev: id + 1,
            residual: forward,
            capacity: forward,
        });
        self.arcs.push(Arc {
            to: u,
            rev: id,
            residual: backward,
            capacity: backward,
        });
        self.adjacency[u].push(id);
        self.adjacency[v].push(id + 1);
        id
    }

    /// Adds a directed edge `u -> v` with capacity `cap` and its reverse
    /// residual arc of capacity 0. Returns the id of the forward arc.
    ///
    /// # Panics
    /// Panics if an endpoint is out of bounds or `cap` is negative.
    pub fn add_edge(&mut self, u: usize, v: usize, cap: i64) -> EdgeId {
        self.push_pair(u, v, cap, 0)
    }

    /// Adds an undirected edge: flow may cross it in either direction, up to
    /// `cap` in total. The reverse arc starts with capacity `cap` instead of 0.
    ///
    /// # Panics
    /// Panics if an endpoint is out of bounds or `cap` is negative.
    pub fn add_bidirectional_edge(&mut self, u: usize, v: usize, cap: i64) -> EdgeId {
        self.push_pair(u, v, cap, cap)
    }

    /// Net flow currently pushed along the arc `edge` (negative if the
    /// partner arc carries more).
    ///
    /// # Panics
    /// Panics if `edge` is not an arc id.
    pub fn flow(&self, edge: EdgeId) -> i64 {
        self.arcs[edge].capacity - self.arcs[edge].residual
    }

    /// Remaining capacity of the arc `edge`.
    ///
    /// # Panics
    /// Panics if `edge` is not an arc id.
    pub fn residual(&self, edge: EdgeId) -> i64 {
        self.arcs[edge].residual
    }

    /// Computes a maximum flow from `s` to `t` and returns its value.
    ///
    /// Flow accumulates in the residual network: calling this again continues
    /// from the current state and returns only the additional flow (0 once the
    /// flow is maximum). `s == t` yields 0.
    ///
    /// # Panics
    /// Panics if `s` or `t` is out of bounds.
    pub fn max_flow(&mut self, s: usize, t: usize) -> i64 {
        let n = self.node_count();
        assert!(s < n && t < n, "terminals {s}, {t} out of bounds for n={n}");
        if s == t {
            return 0;
        }

        let mut level = vec![NO_LEVEL; n];
        let mut cursor = vec![0usize; n];
        let mut path: Vec<EdgeId> = Vec::new();
        let mut total = 0i64;

        while self.assign_levels(s, t, &mut level) {
            cursor.fill(0);
            let mut phase_flow = 0i64;
            loop {
                let pushed = self.augment(s, t, &level, &mut cursor, &mut path);
                if pushed == 0 {
                    break;
                }
                phase_flow += pushed;
            }
            log_trace!(sink_level = level[t], phase_flow, "dinic phase finished");
            total += phase_flow;
        }

        log_debug!(
            vertices = n,
            arcs = self.arcs.len(),
            flow = total,
            "dinic finished"
        );
        total
    }

    /// BFS over positive-residual arcs. Returns `true` if `t` got a level.
    fn assign_levels(&self, s: usize, t: usize, level: &mut [usize]) -> bool {
        level.fill(NO_LEVEL);
        let mut queue = VecDeque::new();
        level[s] = 0;
        queue.push_back(s);

        while let Some(u) = queue.pop_front() {
            for &id in &self.adjacency[u] {
                let arc = &self.arcs[id];
                if arc.residual > 0 && level[arc.to] == NO_LEVEL {
                    level[arc.to] = level[u] + 1;
                    queue.push_back(arc.to);
                }
            }
        }

        level[t] != NO_LEVEL
    }

    /// Finds one augmenting path in the level graph and pushes its bottleneck.
    ///
    /// `path` holds the arcs from `s` to the current vertex. An arc under a
    /// vertex's cursor is only skipped once it has no residual capacity, leaves
    /// the level graph, or leads to a dead end. Returns 0 when the source
    /// itself is exhausted.
    fn augment(
        &mut self,
        s: usize,
        t: usize,
        level: &[usize],
        cursor: &mut [usize],
        path: &mut Vec<EdgeId>,
    ) -> i64 {
        path.clear();
        let mut u = s;

        loop {
            if u == t {
                let bottleneck = path
                    .iter()
                    .map(|&id| self.arcs[id].residual)
                    .min()
                    .unwrap_or(0);
                for &id in path.iter() {
                    let rev = self.arcs[id].rev;
                    self.arcs[id].residual -= bottleneck;
                    self.arcs[rev].residual += bottleneck;
                }
                return bottleneck;
            }

            let mut advanced = false;
            while let Some(&id) = self.adjacency[u].get(cursor[u]) {
                let arc = self.arcs[id];
                if arc.residual > 0 && level[arc.to] == level[u] + 1 {
                    path.push(id);
                    u = arc.to;
                    advanced = true;
                    break;
                }
                cursor[u] += 1;
            }
            if advanced {
                continue;
            }

            // Dead end: retreat one arc and retire it at its tail.
            match path.pop() {
                Some(id) => {
                    u = self.arcs[self.arcs[id].rev].to;
                    cursor[u] += 1;
                }
                None => return 0,
            }
        }
    }

    /// Reads a minimum cut off the residual network after [`max_flow`](Self::max_flow).
    ///
    /// The source side is everything reachable from `s` through arcs with
    /// positive residual capacity.
    ///
    /// # Panics
    /// Panics if `s` is out of bounds.
    pub fn min_cut(&self, s: usize) -> MinCut {
        let n = self.node_count();
        assert!(s < n, "source {s} out of bounds for n={n}");

        let mut source_side = vec![false; n];
        let mut stack = vec![s];
        source_side[s] = true;
        while let Some(u) = stack.pop() {
            for &id in &self.adjacency[u] {
                let arc = &self.arcs[id];
                if arc.residual > 0 && !source_side[arc.to] {
                    source_side[arc.to] = true;
                    stack.push(arc.to);
                }
            }
        }

        let mut cut_edges = Vec::new();
        let mut capacity = 0i64;
        for (u, arcs) in self.adjacency.iter().enumerate() {
            if !source_side[u] {
                continue;
            }
            for &id in arcs {
                let arc = &self.arcs[id];
                if arc.capacity > 0 && !source_side[arc.to] {
                    cut_edges.push(id);
                    capacity += arc.capacity;
                }
            }
        }

        MinCut {
            source_side,
            cut_edges,
            capacity,
        }
    }
}
