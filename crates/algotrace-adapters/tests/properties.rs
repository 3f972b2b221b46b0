//! Property tests for the traced algorithms.

use algotrace_adapters::plugins::algorithms::{
    BfsAlgorithm, DfsAlgorithm, DijkstraAlgorithm, GraphColoringAlgorithm, KruskalAlgorithm,
    NQueensAlgorithm, PrimAlgorithm, SortAlgorithm, SortKind, TracedAlgorithm, solve_n_queens,
};
use algotrace_common::types::VertexId;
use algotrace_core::{DisjointSet, Graph, Payload, StepKind, Trace};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

fn vertex(i: usize) -> VertexId {
    VertexId::from(format!("v{i}"))
}

/// Builds a graph from raw `(a, b, weight)` triples, skipping self loops and
/// duplicates. With `connected`, a chain `v0 - v1 - ... ` is added first.
fn build_graph(n: usize, raw: &[(usize, usize, u8)], connected: bool, unit: bool) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_vertex(vertex(i));
    }
    let weight = |w: u8| if unit { 1.0 } else { f64::from(w % 20 + 1) };
    if connected {
        for i in 1..n {
            let w = raw.get(i).map_or(1, |e| e.2);
            graph
                .add_edge(vertex(i - 1), vertex(i), weight(w), false)
                .unwrap();
        }
    }
    for &(a, b, w) in raw {
        let _ = graph.add_edge(vertex(a % n), vertex(b % n), weight(w), false);
    }
    graph
}

fn graph_strategy(connected: bool, unit: bool) -> impl Strategy<Value = Graph> {
    (1usize..9)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, any::<u8>()), 0..(n * 2)),
            )
        })
        .prop_map(move |(n, raw)| build_graph(n, &raw, connected, unit))
}

fn json(trace: &Trace) -> String {
    serde_json::to_string(trace).unwrap()
}

proptest! {
    #[test]
    fn dijkstra_converged_distances_are_relaxed(graph in graph_strategy(false, false)) {
        // An isolated target forces the search to settle every reachable vertex.
        let mut graph = graph;
        graph.add_vertex("sink");
        let result = DijkstraAlgorithm::new("v0", "sink").run(&graph).unwrap().output;

        prop_assert_eq!(result.distances[&vertex(0)], 0.0);
        prop_assert!(!result.is_reachable());
        for edge in graph.edges() {
            for (u, v) in [(&edge.from, &edge.to), (&edge.to, &edge.from)] {
                let du = result.distances[u];
                if du.is_finite() {
                    prop_assert!(result.distances[v] <= du + edge.weight + EPSILON);
                }
            }
        }
    }

    #[test]
    fn dijkstra_path_weight_matches_distance(graph in graph_strategy(true, false)) {
        let end = vertex(graph.vertex_count() - 1);
        let result = DijkstraAlgorithm::new(vertex(0), end.clone()).run(&graph).unwrap().output;

        prop_assert_eq!(result.path.first(), Some(&vertex(0)));
        prop_assert_eq!(result.path.last(), Some(&end));
        let walked: f64 = result
            .path
            .windows(2)
            .map(|pair| graph.weight(&pair[0], &pair[1]).unwrap())
            .sum();
        prop_assert!((walked - result.distance).abs() < EPSILON);
    }

    #[test]
    fn kruskal_accepts_a_forest(graph in graph_strategy(false, false)) {
        let tree = KruskalAlgorithm.run(&graph).unwrap().output;
        let mut components: DisjointSet<VertexId> = graph.vertices().cloned().collect();
        for edge in &tree.edges {
            prop_assert!(components.union(&edge.from, &edge.to));
        }
        prop_assert_eq!(tree.spanning, components.set_count() == 1);
    }

    #[test]
    fn kruskal_and_prim_agree_on_connected_graphs(graph in graph_strategy(true, false)) {
        let kruskal = KruskalAlgorithm.run(&graph).unwrap().output;
        let prim = PrimAlgorithm.run(&graph).unwrap().output;

        prop_assert_eq!(kruskal.edges.len(), graph.vertex_count() - 1);
        prop_assert_eq!(prim.edges.len(), graph.vertex_count() - 1);
        prop_assert!((kruskal.total_weight - prim.total_weight).abs() < EPSILON);
    }

    #[test]
    fn bfs_levels_are_hop_counts(graph in graph_strategy(false, true)) {
        let traversal = BfsAlgorithm::new(vertex(0)).run(&graph).unwrap().output;
        let mut graph = graph;
        graph.add_vertex("sink");
        let hops = DijkstraAlgorithm::new(vertex(0), "sink").run(&graph).unwrap().output;

        for (v, level) in &traversal.levels {
            prop_assert_eq!(*level as f64, hops.distances[v]);
        }
        let reachable = hops.distances.values().filter(|d| d.is_finite()).count();
        prop_assert_eq!(traversal.order.len(), reachable);
    }

    #[test]
    fn dfs_visits_reachable_once(graph in graph_strategy(false, true)) {
        let bfs = BfsAlgorithm::new(vertex(0)).run(&graph).unwrap().output;
        let dfs = DfsAlgorithm::new(vertex(0)).run(&graph).unwrap();

        let mut seen = dfs.output.order.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), dfs.output.order.len());
        prop_assert_eq!(seen.len(), bfs.order.len());

        let empties = dfs
            .trace
            .iter()
            .filter(|s| s.kind == StepKind::Leave)
            .filter(|s| matches!(&s.payload, Payload::Traversal(t) if t.path.is_empty()))
            .count();
        prop_assert_eq!(empties, 1);
    }

    #[test]
    fn coloring_is_proper_or_exhausted(graph in graph_strategy(false, true), colors in 1usize..4) {
        let traced = GraphColoringAlgorithm::new(colors).run(&graph).unwrap();
        match traced.output.assignment {
            Some(assignment) => {
                prop_assert_eq!(assignment.len(), graph.vertex_count());
                for edge in graph.edges() {
                    prop_assert_ne!(assignment[&edge.from], assignment[&edge.to]);
                }
                prop_assert_eq!(traced.trace.last().unwrap().kind, StepKind::Solved);
            }
            None => prop_assert_eq!(traced.trace.last().unwrap().kind, StepKind::NoSolution),
        }
    }

    #[test]
    fn sorts_match_std(values in prop::collection::vec(-50i64..50, 0..24)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        for kind in SortKind::ALL {
            let sorted = SortAlgorithm::new(kind).run(&values).unwrap().output;
            prop_assert_eq!(&sorted, &expected);
        }
    }

    #[test]
    fn engines_are_deterministic(graph in graph_strategy(true, false), values in prop::collection::vec(-9i64..9, 0..10)) {
        let end = vertex(graph.vertex_count() - 1);
        let runs = |graph: &Graph| {
            vec![
                json(&DijkstraAlgorithm::new(vertex(0), end.clone()).run_trace(graph).unwrap()),
                json(&KruskalAlgorithm.run_trace(graph).unwrap()),
                json(&PrimAlgorithm.run_trace(graph).unwrap()),
                json(&BfsAlgorithm::new(vertex(0)).run_trace(graph).unwrap()),
                json(&DfsAlgorithm::all().run_trace(graph).unwrap()),
                json(&GraphColoringAlgorithm::new(3).run_trace(graph).unwrap()),
                json(&SortAlgorithm::new(SortKind::Quick).run_trace(&values).unwrap()),
                json(&SortAlgorithm::new(SortKind::Merge).run_trace(&values).unwrap()),
            ]
        };
        prop_assert_eq!(runs(&graph), runs(&graph.clone()));
    }
}

fn assert_valid_queens(rows: &[usize]) {
    for (c1, r1) in rows.iter().enumerate() {
        for (c2, r2) in rows.iter().enumerate().skip(c1 + 1) {
            assert_ne!(r1, r2, "row clash");
            assert_ne!(r1.abs_diff(*r2), c2 - c1, "diagonal clash");
        }
    }
}

#[test]
fn n_queens_solutions_are_valid() {
    for n in 4..20 {
        let rows = solve_n_queens(n).unwrap_or_else(|| panic!("no solution for {n}"));
        assert_eq!(rows.len(), n);
        assert_valid_queens(&rows);
    }
}

#[test]
fn traced_n_queens_matches_untraced() {
    for n in 4..=12 {
        let traced = NQueensAlgorithm.run(&n).unwrap();
        assert_eq!(traced.output.rows, solve_n_queens(n));
        assert_eq!(traced.trace.last().unwrap().kind, StepKind::Solved);
        assert_eq!(
            traced.trace.count(StepKind::Try) - traced.trace.count(StepKind::Backtrack),
            n
        );
    }
}
