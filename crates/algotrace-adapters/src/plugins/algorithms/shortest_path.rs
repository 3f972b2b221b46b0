//! Dijkstra's shortest path.

use algotrace_common::types::VertexId;
use algotrace_common::utils::error::EngineError;
use algotrace_common::utils::hash::FxHashSet;
use algotrace_core::trace::ShortestPathState;
use algotrace_core::{AlgorithmKind, Graph, PriorityQueue, Step, StepKind, TraceRecorder};
use indexmap::IndexMap;
use serde::Serialize;

use super::traits::TracedAlgorithm;

/// Result of a shortest-path search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Vertices from start to end; empty when the end is unreachable.
    pub path: Vec<VertexId>,
    /// Path length; `f64::INFINITY` when the end is unreachable.
    pub distance: f64,
    /// Final tentative distance of every vertex.
    pub distances: IndexMap<VertexId, f64>,
    /// Predecessor of every vertex reached.
    pub predecessors: IndexMap<VertexId, VertexId>,
}

impl ShortestPath {
    /// Returns whether a path was found.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Finds the shortest path from `start` to `end`.
///
/// Every vertex is queued up front keyed by its tentative distance; improved
/// distances are re-queued and stale copies skipped when they surface. The
/// search stops as soon as `end` is extracted. If the queue runs dry first,
/// or only unreachable vertices remain, the result has an empty path and an
/// infinite distance and the trace ends in an `Unreachable` step.
///
/// # Errors
///
/// [`EngineError::UnknownVertex`] if `start` or `end` is not in the graph.
pub fn dijkstra(
    graph: &Graph,
    start: &VertexId,
    end: &VertexId,
    recorder: &mut TraceRecorder,
) -> Result<ShortestPath, EngineError> {
    for vertex in [start, end] {
        if !graph.contains_vertex(vertex) {
            return Err(EngineError::UnknownVertex(vertex.clone()));
        }
    }

    let mut state = Search::new(graph, start);
    let mut queue = PriorityQueue::with_capacity(graph.vertex_count());
    for (vertex, distance) in &state.distances {
        queue.insert(vertex.clone(), *distance);
    }
    recorder.record(
        Step::new(
            StepKind::Init,
            format!("Initialized distances: {start} = 0, all others = infinity"),
        )
        .vertex(start)
        .with_payload(state.snapshot()),
    )?;

    while let Some(item) = queue.pop() {
        let current = item.value;
        if state.settled.contains(&current) {
            continue;
        }
        if item.priority.is_infinite() {
            // Everything left in the queue is unreachable from start.
            break;
        }

        state.settle(&current);
        recorder.record(
            Step::new(
                StepKind::Extract,
                format!("Visiting {current} (distance {})", item.priority),
            )
            .vertex(&current)
            .with_payload(state.snapshot()),
        )?;

        if current == *end {
            let path = state.path_to(end);
            let distance = state.distances[end];
            let mut snapshot = state.snapshot();
            snapshot.path.clone_from(&path);
            recorder.record(
                path.windows(2)
                    .fold(
                        Step::new(
                            StepKind::PathFound,
                            format!("Shortest path {} with distance {distance}", join(&path)),
                        ),
                        |step, pair| step.edge(&pair[0], &pair[1]),
                    )
                    .with_payload(snapshot),
            )?;
            return Ok(state.finish(path, distance));
        }

        let base = state.distances[&current];
        for neighbor in graph.neighbors(&current) {
            let candidate = base + neighbor.weight;
            let known = state.distances[&neighbor.vertex];
            recorder.record(
                Step::new(
                    StepKind::Relax,
                    format!(
                        "Checking {current} -> {}: {base} + {} = {candidate} (current {})",
                        neighbor.vertex,
                        neighbor.weight,
                        fmt_distance(known)
                    ),
                )
                .edge(&current, &neighbor.vertex)
                .with_payload(state.snapshot()),
            )?;

            if candidate < known {
                state
                    .distances
                    .insert(neighbor.vertex.clone(), candidate);
                state
                    .predecessors
                    .insert(neighbor.vertex.clone(), current.clone());
                queue.insert(neighbor.vertex.clone(), candidate);
                recorder.record(
                    Step::new(
                        StepKind::Update,
                        format!(
                            "Updated {}: distance {candidate} via {current}",
                            neighbor.vertex
                        ),
                    )
                    .vertex(&neighbor.vertex)
                    .edge(&current, &neighbor.vertex)
                    .with_payload(state.snapshot()),
                )?;
            }
        }
    }

    tracing::debug!(%start, %end, "end vertex unreachable");
    recorder.record(
        Step::new(
            StepKind::Unreachable,
            format!("{end} is unreachable from {start}"),
        )
        .vertex(end)
        .with_payload(state.snapshot()),
    )?;
    Ok(state.finish(Vec::new(), f64::INFINITY))
}

/// Mutable search state.
struct Search {
    current: Option<VertexId>,
    distances: IndexMap<VertexId, f64>,
    predecessors: IndexMap<VertexId, VertexId>,
    settled: FxHashSet<VertexId>,
    settled_order: Vec<VertexId>,
}

impl Search {
    fn new(graph: &Graph, start: &VertexId) -> Self {
        let distances = graph
            .vertices()
            .map(|v| (v.clone(), if v == start { 0.0 } else { f64::INFINITY }))
            .collect();
        Self {
            current: None,
            distances,
            predecessors: IndexMap::new(),
            settled: FxHashSet::default(),
            settled_order: Vec::new(),
        }
    }

    fn settle(&mut self, vertex: &VertexId) {
        self.settled.insert(vertex.clone());
        self.settled_order.push(vertex.clone());
        self.current = Some(vertex.clone());
    }

    fn path_to(&self, end: &VertexId) -> Vec<VertexId> {
        let mut path = vec![end.clone()];
        let mut cursor = end;
        while let Some(previous) = self.predecessors.get(cursor) {
            path.push(previous.clone());
            cursor = previous;
        }
        path.reverse();
        path
    }

    fn snapshot(&self) -> ShortestPathState {
        ShortestPathState {
            distances: self
                .distances
                .iter()
                .map(|(v, d)| (v.clone(), d.is_finite().then_some(*d)))
                .collect(),
            predecessors: self.predecessors.clone(),
            settled: self.settled_order.clone(),
            current: self.current.clone(),
            path: Vec::new(),
        }
    }

    fn finish(self, path: Vec<VertexId>, distance: f64) -> ShortestPath {
        ShortestPath {
            path,
            distance,
            distances: self.distances,
            predecessors: self.predecessors,
        }
    }
}

fn fmt_distance(distance: f64) -> String {
    if distance.is_finite() {
        distance.to_string()
    } else {
        "infinity".to_string()
    }
}

fn join(path: &[VertexId]) -> String {
    path.iter()
        .map(VertexId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Dijkstra as a [`TracedAlgorithm`].
#[derive(Debug, Clone)]
pub struct DijkstraAlgorithm {
    start: VertexId,
    end: VertexId,
}

impl DijkstraAlgorithm {
    /// Creates a search from `start` to `end`.
    pub fn new(start: impl Into<VertexId>, end: impl Into<VertexId>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl TracedAlgorithm for DijkstraAlgorithm {
    type Input = Graph;
    type Output = ShortestPath;

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Dijkstra
    }

    fn execute(
        &self,
        input: &Graph,
        recorder: &mut TraceRecorder,
    ) -> Result<ShortestPath, EngineError> {
        dijkstra(input, &self.start, &self.end, recorder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v);
        }
        graph.add_edge("A", "B", 4.0, false).unwrap();
        graph.add_edge("A", "C", 1.0, false).unwrap();
        graph.add_edge("C", "B", 2.0, false).unwrap();
        graph.add_edge("B", "D", 5.0, false).unwrap();
        graph.add_edge("C", "D", 8.0, false).unwrap();
        graph
    }

    fn ids(names: &[&str]) -> Vec<VertexId> {
        names.iter().map(|n| VertexId::from(*n)).collect()
    }

    #[test]
    fn test_dijkstra_sample_path() {
        let traced = DijkstraAlgorithm::new("A", "D")
            .run(&sample_graph())
            .unwrap();

        assert_eq!(traced.output.path, ids(&["A", "C", "B", "D"]));
        assert_eq!(traced.output.distance, 8.0);
        assert_eq!(traced.output.distances[&VertexId::from("A")], 0.0);
        assert_eq!(traced.trace.last().unwrap().kind, StepKind::PathFound);
    }

    #[test]
    fn test_one_step_per_relaxation_and_update() {
        let trace = DijkstraAlgorithm::new("A", "D")
            .run_trace(&sample_graph())
            .unwrap();

        // A relaxes B, C; C relaxes A, B, D; B relaxes A, C, D.
        assert_eq!(trace.count(StepKind::Relax), 8);
        // B=4, C=1, B=3, D=9, D=8
        assert_eq!(trace.count(StepKind::Update), 5);
        assert_eq!(trace.count(StepKind::Extract), 4);
    }

    #[test]
    fn test_unreachable_end() {
        let mut graph = sample_graph();
        graph.add_vertex("Z");

        let traced = DijkstraAlgorithm::new("A", "Z").run(&graph).unwrap();
        assert!(!traced.output.is_reachable());
        assert!(traced.output.path.is_empty());
        assert_eq!(traced.output.distance, f64::INFINITY);
        assert_eq!(traced.trace.last().unwrap().kind, StepKind::Unreachable);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let mut graph = Graph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_edge("B", "A", 1.0, true).unwrap();

        let result = DijkstraAlgorithm::new("A", "B").run(&graph).unwrap();
        assert!(!result.output.is_reachable());

        let back = DijkstraAlgorithm::new("B", "A").run(&graph).unwrap();
        assert_eq!(back.output.path, ids(&["B", "A"]));
    }

    #[test]
    fn test_start_equals_end() {
        let traced = DijkstraAlgorithm::new("B", "B")
            .run(&sample_graph())
            .unwrap();
        assert_eq!(traced.output.path, ids(&["B"]));
        assert_eq!(traced.output.distance, 0.0);
    }

    #[test]
    fn test_unknown_vertex() {
        let err = DijkstraAlgorithm::new("A", "Q")
            .run(&sample_graph())
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownVertex(VertexId::from("Q")));
    }

    #[test]
    fn test_payload_distances_use_none_for_infinity() {
        let trace = DijkstraAlgorithm::new("A", "D")
            .run_trace(&sample_graph())
            .unwrap();
        let first = trace.get(0).unwrap();
        let algotrace_core::Payload::ShortestPath(state) = &first.payload else {
            panic!("expected shortest path payload");
        };
        assert_eq!(state.distances[&VertexId::from("A")], Some(0.0));
        assert_eq!(state.distances[&VertexId::from("D")], None);
    }

    #[test]
    fn test_deterministic() {
        let graph = sample_graph();
        let algorithm = DijkstraAlgorithm::new("A", "D");
        let first = serde_json::to_string(&algorithm.run_trace(&graph).unwrap()).unwrap();
        let second = serde_json::to_string(&algorithm.run_trace(&graph).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
