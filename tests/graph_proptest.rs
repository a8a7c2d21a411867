use petgraph::algo as pg_algo;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use proptest::prelude::*;
use trellis::graph::algorithms::{
    bellman_ford, bfs_levels, cut_structure, dijkstra, distance_matrix, floyd_warshall,
    has_negative_cycle, kruskal, topological_sort, FlowNetwork, Lca, StronglyConnectedComponents,
};
use trellis::{DiGraph, DisjointSet, UnGraph, UNREACHED};

type EdgeList = Vec<(usize, usize, i64)>;

/// `n` in `1..=max_n` plus up to `3n` random edges with weights in `0..=max_w`.
fn arb_graph(max_n: usize, max_w: i64) -> impl Strategy<Value = (usize, EdgeList)> {
    (1..=max_n).prop_flat_map(move |n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 0..=max_w), 0..=3 * n),
        )
    })
}

/// A random tree given as `parent[i] < i` for `i >= 1`.
fn arb_tree(max_n: usize) -> impl Strategy<Value = Vec<usize>> {
    (1..=max_n).prop_flat_map(|n| {
        (1..n)
            .map(|i| (0..i).boxed())
            .collect::<Vec<_>>()
            .prop_map(|parents| {
                let mut parent = vec![usize::MAX];
                parent.extend(parents);
                parent
            })
    })
}

fn digraph(n: usize, edges: &[(usize, usize, i64)]) -> DiGraph<i64> {
    DiGraph::<i64>::from_edges(n, edges.iter().copied())
}

fn ungraph(n: usize, edges: &[(usize, usize, i64)]) -> UnGraph<i64> {
    UnGraph::<i64>::from_edges(n, edges.iter().copied())
}

fn petgraph_digraph(n: usize, edges: &[(usize, usize, i64)]) -> petgraph::graph::DiGraph<(), i64> {
    let mut g = petgraph::graph::DiGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v, w) in edges {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }
    g
}

/// `reach[u][v]` for every pair, by BFS from each vertex.
fn reachability(n: usize, edges: &[(usize, usize, i64)]) -> Vec<Vec<bool>> {
    let g = digraph(n, edges);
    (0..n)
        .map(|s| bfs_levels(&g, s).into_iter().map(|d| d != UNREACHED).collect())
        .collect()
}

/// Connected components among vertices not in `removed_vertex`, ignoring edge `removed_edge`.
fn component_count(
    n: usize,
    edges: &[(usize, usize, i64)],
    removed_vertex: Option<usize>,
    removed_edge: Option<usize>,
) -> usize {
    let mut ds = DisjointSet::new(n);
    for (i, &(u, v, _)) in edges.iter().enumerate() {
        if Some(i) == removed_edge || Some(u) == removed_vertex || Some(v) == removed_vertex {
            continue;
        }
        ds.union(u, v);
    }
    let mut roots: Vec<usize> = (0..n)
        .filter(|&v| Some(v) != removed_vertex)
        .map(|v| ds.find(v))
        .collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

/// Minimum spanning forest weight by trying every edge subset.
fn brute_force_forest_weight(n: usize, edges: &[(usize, usize, i64)]) -> i64 {
    let target = n - component_count(n, edges, None, None);
    let mut best = i64::MAX;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != target {
            continue;
        }
        let mut ds = DisjointSet::new(n);
        let mut weight = 0;
        let mut acyclic = true;
        for (i, &(u, v, w)) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                acyclic &= ds.union(u, v);
                weight += w;
            }
        }
        if acyclic {
            best = best.min(weight);
        }
    }
    best
}

/// Edmonds-Karp on a capacity matrix.
fn brute_force_max_flow(n: usize, edges: &[(usize, usize, i64)], s: usize, t: usize) -> i64 {
    if s == t {
        return 0;
    }
    let mut cap = vec![vec![0i64; n]; n];
    for &(u, v, c) in edges {
        cap[u][v] += c;
    }
    let mut flow = 0;
    loop {
        let mut prev = vec![usize::MAX; n];
        prev[s] = s;
        let mut queue = std::collections::VecDeque::from([s]);
        while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if prev[v] == usize::MAX && cap[u][v] > 0 {
                    prev[v] = u;
                    queue.push_back(v);
                }
            }
        }
        if prev[t] == usize::MAX {
            return flow;
        }
        let mut bottleneck = i64::MAX;
        let mut v = t;
        while v != s {
            bottleneck = bottleneck.min(cap[prev[v]][v]);
            v = prev[v];
        }
        let mut v = t;
        while v != s {
            cap[prev[v]][v] -= bottleneck;
            cap[v][prev[v]] += bottleneck;
            v = prev[v];
        }
        flow += bottleneck;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn topological_sort_is_complete_iff_acyclic((n, edges) in arb_graph(10, 0)) {
        let order = topological_sort(&digraph(n, &edges));
        let pg = petgraph_digraph(n, &edges);
        prop_assert_eq!(order.len() == n, pg_algo::toposort(&pg, None).is_ok());

        if order.len() == n {
            let mut pos = vec![0; n];
            for (i, &v) in order.iter().enumerate() {
                pos[v] = i;
            }
            for &(u, v, _) in &edges {
                prop_assert!(pos[u] < pos[v]);
            }
        }
    }

    #[test]
    fn dag_edges_always_sort_fully((n, edges) in arb_graph(10, 0)) {
        let forward: EdgeList = edges
            .into_iter()
            .filter(|&(u, v, _)| u != v)
            .map(|(u, v, w)| (u.min(v), u.max(v), w))
            .collect();
        prop_assert_eq!(topological_sort(&digraph(n, &forward)).len(), n);
    }

    #[test]
    fn bfs_levels_match_unit_weight_shortest_paths(
        (n, edges) in arb_graph(10, 0),
        src in 0usize..10,
    ) {
        let src = src % n;
        let unit: EdgeList = edges.iter().map(|&(u, v, _)| (u, v, 1)).collect();
        let expected = bellman_ford(n, &unit, src).unwrap();
        prop_assert_eq!(bfs_levels(&digraph(n, &edges), src), expected);
    }

    #[test]
    fn lca_is_deepest_common_ancestor(parent in arb_tree(24), a in 0usize..24, b in 0usize..24) {
        let n = parent.len();
        let (a, b) = (a % n, b % n);
        let tree = UnGraph::<()>::from_edges(n, (1..n).map(|i| (parent[i], i, ())));
        let lca = Lca::new(&tree, 0);

        let ancestors = |mut v: usize| {
            let mut chain = vec![v];
            while v != 0 {
                v = parent[v];
                chain.push(v);
            }
            chain
        };
        let of_b = ancestors(b);
        let expected = ancestors(a).into_iter().find(|v| of_b.contains(v));

        prop_assert_eq!(lca.query(a, a), Some(a));
        prop_assert_eq!(lca.query(a, b), expected);
        let c = lca.query(a, b).unwrap();
        let depth = |v| lca.depth(v).unwrap();
        prop_assert!(depth(c) <= depth(a).min(depth(b)));
        prop_assert_eq!(lca.lift(a, depth(a) - depth(c)), Some(c));
    }

    #[test]
    fn dijkstra_matches_bellman_ford_and_petgraph(
        (n, edges) in arb_graph(10, 20),
        src in 0usize..10,
    ) {
        let src = src % n;
        let g = digraph(n, &edges);
        let sp = dijkstra(&g, src);

        prop_assert_eq!(&sp.dist, &bellman_ford(n, &edges, src).unwrap());

        let pg = petgraph_digraph(n, &edges);
        let reference = pg_algo::dijkstra(&pg, NodeIndex::new(src), None, |e| *e.weight());
        for v in 0..n {
            prop_assert_eq!(sp.distance(v), reference.get(&NodeIndex::new(v)).copied());
        }

        // Every reconstructed path is a real path with the reported length.
        for v in 0..n {
            if let Some(path) = sp.path_to(v) {
                prop_assert_eq!(path[0], src);
                let mut length = 0;
                for pair in path.windows(2) {
                    let w = edges
                        .iter()
                        .filter(|&&(u, x, _)| u == pair[0] && x == pair[1])
                        .map(|&(_, _, w)| w)
                        .min();
                    prop_assert!(w.is_some());
                    length += w.unwrap();
                }
                prop_assert_eq!(length, sp.dist[v]);
            }
        }
    }

    #[test]
    fn floyd_warshall_satisfies_triangle_inequality((n, edges) in arb_graph(8, 20)) {
        let g = digraph(n, &edges);
        let dist = floyd_warshall(distance_matrix(&g));
        for i in 0..n {
            prop_assert_eq!(&dist[i], &dijkstra(&g, i).dist);
            for j in 0..n {
                for k in 0..n {
                    if dist[i][k] < UNREACHED && dist[k][j] < UNREACHED {
                        prop_assert!(dist[i][j] <= dist[i][k] + dist[k][j]);
                    }
                }
            }
        }
    }

    #[test]
    fn floyd_warshall_with_negative_weights_matches_bellman_ford(
        (n, edges) in (1usize..=8).prop_flat_map(|n| {
            (Just(n), proptest::collection::vec((0..n, 0..n, -10i64..=20), 0..=3 * n))
        })
    ) {
        let dist = floyd_warshall(distance_matrix(&digraph(n, &edges)));
        // Every cycle is reachable from its own vertices.
        let rows: Option<Vec<Vec<i64>>> =
            (0..n).map(|src| bellman_ford(n, &edges, src).ok()).collect();
        match rows {
            Some(rows) => {
                prop_assert!(!has_negative_cycle(&dist));
                prop_assert_eq!(dist, rows);
            }
            None => prop_assert!(has_negative_cycle(&dist)),
        }
    }

    #[test]
    fn kruskal_matches_exhaustive_search(
        (n, edges) in (1usize..=8).prop_flat_map(|n| {
            (Just(n), proptest::collection::vec((0..n, 0..n, -5i64..=20), 0..=10))
        })
    ) {
        let forest = kruskal(n, &edges);
        prop_assert_eq!(forest.total_weight, brute_force_forest_weight(n, &edges));
        prop_assert_eq!(forest.component_count(n), component_count(n, &edges, None, None));
    }

    #[test]
    fn cut_structure_matches_removal((n, edges) in arb_graph(9, 0)) {
        let cut = cut_structure(&ungraph(n, &edges));
        let base = component_count(n, &edges, None, None);

        for (i, &(u, v, _)) in edges.iter().enumerate() {
            if component_count(n, &edges, None, Some(i)) > base {
                prop_assert!(cut.is_bridge(u, v), "edge {}-{} splits the graph", u, v);
            }
        }
        prop_assert_eq!(
            cut.bridges.len(),
            (0..edges.len()).filter(|&i| component_count(n, &edges, None, Some(i)) > base).count()
        );

        for v in 0..n {
            let splits = component_count(n, &edges, Some(v), None) > base;
            prop_assert_eq!(cut.is_articulation_point(v), splits, "vertex {}", v);
        }
    }

    #[test]
    fn scc_is_mutual_reachability((n, edges) in arb_graph(10, 0)) {
        let scc = StronglyConnectedComponents::new(&digraph(n, &edges));
        let reach = reachability(n, &edges);
        for u in 0..n {
            for v in 0..n {
                prop_assert_eq!(scc.same_component(u, v), reach[u][v] && reach[v][u]);
            }
        }
        let pg = petgraph_digraph(n, &edges);
        prop_assert_eq!(scc.count(), pg_algo::kosaraju_scc(&pg).len());
    }

    #[test]
    fn dinic_matches_edmonds_karp_and_min_cut(
        (n, edges) in arb_graph(8, 20),
        s in 0usize..8,
        t in 0usize..8,
    ) {
        let (s, t) = (s % n, t % n);
        let mut net = FlowNetwork::new(n);
        for &(u, v, c) in &edges {
            net.add_edge(u, v, c);
        }
        let flow = net.max_flow(s, t);
        prop_assert_eq!(flow, brute_force_max_flow(n, &edges, s, t));

        if s != t {
            let cut = net.min_cut(s);
            prop_assert_eq!(cut.capacity, flow);
            prop_assert!(cut.source_side[s]);
            prop_assert!(!cut.source_side[t]);
        }
    }
}
