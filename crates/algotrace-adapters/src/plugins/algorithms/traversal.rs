//! Breadth-first and depth-first traversal.

use std::collections::VecDeque;

use algotrace_common::types::VertexId;
use algotrace_common::utils::error::EngineError;
use algotrace_common::utils::hash::FxHashSet;
use algotrace_core::trace::TraversalState;
use algotrace_core::{AlgorithmKind, Graph, Step, StepKind, TraceRecorder};
use indexmap::IndexMap;
use serde::Serialize;

use super::traits::TracedAlgorithm;

/// Result of a traversal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Traversal {
    /// Vertices in visit order.
    pub order: Vec<VertexId>,
    /// Depth of each visited vertex: hop count for BFS, tree depth for DFS.
    pub levels: IndexMap<VertexId, usize>,
    /// Vertex each visited vertex was discovered from.
    pub parents: IndexMap<VertexId, VertexId>,
    /// Number of traversal roots (components covered).
    pub components: usize,
}

fn check_start(graph: &Graph, start: &VertexId) -> Result<(), EngineError> {
    if graph.contains_vertex(start) {
        Ok(())
    } else {
        Err(EngineError::UnknownVertex(start.clone()))
    }
}

// === BFS ===

/// Breadth-first search from `start`.
///
/// Vertices are marked when first enqueued, so each is queued exactly once.
/// One `Visit` step is recorded per dequeue and one `Discover` step per edge
/// that reaches a new vertex.
///
/// # Errors
///
/// [`EngineError::UnknownVertex`] if `start` is not in the graph.
pub fn bfs(
    graph: &Graph,
    start: &VertexId,
    recorder: &mut TraceRecorder,
) -> Result<Traversal, EngineError> {
    check_start(graph, start)?;

    let mut result = Traversal {
        components: 1,
        ..Traversal::default()
    };
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());
    result.levels.insert(start.clone(), 0);

    let snapshot = |result: &Traversal, queue: &VecDeque<VertexId>| TraversalState {
        order: result.order.clone(),
        frontier: queue.iter().cloned().collect(),
        path: Vec::new(),
        levels: result.levels.clone(),
    };

    recorder.record(
        Step::new(StepKind::Init, format!("Queued {start} at level 0"))
            .vertex(start)
            .with_payload(snapshot(&result, &queue)),
    )?;

    while let Some(current) = queue.pop_front() {
        let level = result.levels[&current];
        result.order.push(current.clone());
        recorder.record(
            Step::new(
                StepKind::Visit,
                format!("Visiting {current} (level {level})"),
            )
            .vertex(&current)
            .with_payload(snapshot(&result, &queue)),
        )?;

        for neighbor in graph.neighbors(&current) {
            if visited.insert(neighbor.vertex.clone()) {
                result.levels.insert(neighbor.vertex.clone(), level + 1);
                result
                    .parents
                    .insert(neighbor.vertex.clone(), current.clone());
                queue.push_back(neighbor.vertex.clone());
                recorder.record(
                    Step::new(
                        StepKind::Discover,
                        format!(
                            "Discovered {} from {current} (level {})",
                            neighbor.vertex,
                            level + 1
                        ),
                    )
                    .edge(&current, &neighbor.vertex)
                    .vertex(&neighbor.vertex)
                    .with_payload(snapshot(&result, &queue)),
                )?;
            }
        }
    }

    recorder.record(
        Step::new(
            StepKind::Done,
            format!("BFS complete: visited {} vertices", result.order.len()),
        )
        .with_payload(snapshot(&result, &queue)),
    )?;
    Ok(result)
}

// === DFS ===

/// Depth-first walk state shared across restarts.
struct DepthFirst<'g> {
    graph: &'g Graph,
    visited: FxHashSet<VertexId>,
    path: Vec<VertexId>,
    result: Traversal,
}

impl<'g> DepthFirst<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            path: Vec::new(),
            result: Traversal::default(),
        }
    }

    fn snapshot(&self) -> TraversalState {
        TraversalState {
            order: self.result.order.clone(),
            frontier: Vec::new(),
            path: self.path.clone(),
            levels: self.result.levels.clone(),
        }
    }

    fn enter(
        &mut self,
        vertex: &VertexId,
        parent: Option<&VertexId>,
        recorder: &mut TraceRecorder,
    ) -> Result<(), EngineError> {
        self.visited.insert(vertex.clone());
        self.result.order.push(vertex.clone());
        self.result.levels.insert(vertex.clone(), self.path.len());
        if let Some(parent) = parent {
            self.result.parents.insert(vertex.clone(), parent.clone());
        }
        self.path.push(vertex.clone());

        let mut step = Step::new(
            StepKind::Enter,
            format!("Visiting {vertex}, path: {}", join(&self.path)),
        )
        .vertex(vertex);
        if let Some(parent) = parent {
            step = step.edge(parent, vertex);
        }
        recorder.record(step.with_payload(self.snapshot()))
    }

    fn leave(&mut self, recorder: &mut TraceRecorder) -> Result<(), EngineError> {
        let Some(vertex) = self.path.pop() else {
            return Ok(());
        };
        recorder.record(
            Step::new(
                StepKind::Leave,
                format!("Backtracking from {vertex}, path: {}", join(&self.path)),
            )
            .vertex(&vertex)
            .with_payload(self.snapshot()),
        )
    }

    /// Walks one component. An explicit frame stack of
    /// `(vertex, next neighbor index)` reproduces recursive visit order.
    fn walk(&mut self, root: &VertexId, recorder: &mut TraceRecorder) -> Result<(), EngineError> {
        let graph = self.graph;
        self.result.components += 1;
        self.enter(root, None, recorder)?;
        let mut frames = vec![(root.clone(), 0usize)];

        while let Some((vertex, cursor)) = frames.last_mut() {
            let neighbors = graph.neighbors(vertex);
            let next = neighbors[*cursor..]
                .iter()
                .position(|n| !self.visited.contains(&n.vertex));

            match next {
                Some(offset) => {
                    let neighbor = neighbors[*cursor + offset].vertex.clone();
                    *cursor += offset + 1;
                    let parent = vertex.clone();
                    self.enter(&neighbor, Some(&parent), recorder)?;
                    frames.push((neighbor, 0));
                }
                None => {
                    frames.pop();
                    self.leave(recorder)?;
                }
            }
        }
        Ok(())
    }

    fn finish(self, recorder: &mut TraceRecorder) -> Result<Traversal, EngineError> {
        recorder.record(
            Step::new(
                StepKind::Done,
                format!("DFS complete: visited {} vertices", self.result.order.len()),
            )
            .with_payload(self.snapshot()),
        )?;
        Ok(self.result)
    }
}

fn join(path: &[VertexId]) -> String {
    let names: Vec<_> = path.iter().map(VertexId::as_str).collect();
    format!("[{}]", names.join(", "))
}

/// Depth-first search from `start`.
///
/// Every vertex is entered once. Entering pushes it onto the active path and
/// leaving pops it, each with its own step, so the path is empty only after
/// the final `Leave`.
///
/// # Errors
///
/// [`EngineError::UnknownVertex`] if `start` is not in the graph.
pub fn dfs(
    graph: &Graph,
    start: &VertexId,
    recorder: &mut TraceRecorder,
) -> Result<Traversal, EngineError> {
    check_start(graph, start)?;
    let mut walker = DepthFirst::new(graph);
    walker.walk(start, recorder)?;
    walker.finish(recorder)
}

/// Depth-first search over every component.
///
/// Restarts from each unvisited vertex in insertion order.
pub fn dfs_all(graph: &Graph, recorder: &mut TraceRecorder) -> Result<Traversal, EngineError> {
    let mut walker = DepthFirst::new(graph);
    for vertex in graph.vertices() {
        if !walker.visited.contains(vertex) {
            walker.walk(vertex, recorder)?;
        }
    }
    walker.finish(recorder)
}

/// BFS as a [`TracedAlgorithm`].
#[derive(Debug, Clone)]
pub struct BfsAlgorithm {
    start: VertexId,
}

impl BfsAlgorithm {
    /// Creates a search from `start`.
    pub fn new(start: impl Into<VertexId>) -> Self {
        Self {
            start: start.into(),
        }
    }
}

impl TracedAlgorithm for BfsAlgorithm {
    type Input = Graph;
    type Output = Traversal;

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bfs
    }

    fn execute(
        &self,
        input: &Graph,
        recorder: &mut TraceRecorder,
    ) -> Result<Traversal, EngineError> {
        bfs(input, &self.start, recorder)
    }
}

/// DFS as a [`TracedAlgorithm`]. Without a start vertex every component is
/// covered.
#[derive(Debug, Clone, Default)]
pub struct DfsAlgorithm {
    start: Option<VertexId>,
}

impl DfsAlgorithm {
    /// Creates a search from `start`.
    pub fn new(start: impl Into<VertexId>) -> Self {
        Self {
            start: Some(start.into()),
        }
    }

    /// Creates a search covering all components.
    #[must_use]
    pub fn all() -> Self {
        Self { start: None }
    }
}

impl TracedAlgorithm for DfsAlgorithm {
    type Input = Graph;
    type Output = Traversal;

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Dfs
    }

    fn execute(
        &self,
        input: &Graph,
        recorder: &mut TraceRecorder,
    ) -> Result<Traversal, EngineError> {
        match &self.start {
            Some(start) => dfs(input, start, recorder),
            None => dfs_all(input, recorder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::Payload;

    fn graph(vertices: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut graph = Graph::new();
        for v in vertices {
            graph.add_vertex(*v);
        }
        for (a, b) in edges {
            graph.add_unweighted_edge(*a, *b).unwrap();
        }
        graph
    }

    fn names(order: &[VertexId]) -> Vec<&str> {
        order.iter().map(VertexId::as_str).collect()
    }

    #[test]
    fn test_bfs_levels() {
        let g = graph(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("B", "D")]);
        let traced = BfsAlgorithm::new("A").run(&g).unwrap();

        assert_eq!(names(&traced.output.order), vec!["A", "B", "C", "D"]);
        let levels: Vec<_> = traced
            .output
            .levels
            .iter()
            .map(|(v, l)| (v.as_str(), *l))
            .collect();
        assert_eq!(levels, vec![("A", 0), ("B", 1), ("C", 2), ("D", 2)]);
        assert_eq!(traced.trace.count(StepKind::Visit), 4);
        assert_eq!(traced.trace.count(StepKind::Discover), 3);
    }

    #[test]
    fn test_bfs_never_enqueues_twice() {
        // A diamond: D is reachable from both B and C.
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        let traced = BfsAlgorithm::new("A").run(&g).unwrap();
        assert_eq!(names(&traced.output.order), vec!["A", "B", "C", "D"]);
        assert_eq!(traced.output.parents[&VertexId::from("D")].as_str(), "B");
    }

    #[test]
    fn test_dfs_visits_depth_first() {
        let g = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "E")],
        );
        let traced = DfsAlgorithm::new("A").run(&g).unwrap();
        assert_eq!(names(&traced.output.order), vec!["A", "B", "D", "C", "E"]);
        assert_eq!(traced.trace.count(StepKind::Enter), 5);
        assert_eq!(traced.trace.count(StepKind::Leave), 5);
    }

    #[test]
    fn test_dfs_path_empties_once_at_end() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")],
        );
        let trace = DfsAlgorithm::new("A").run_trace(&g).unwrap();

        let empties: Vec<usize> = trace
            .iter()
            .enumerate()
            .filter(|(_, step)| step.kind == StepKind::Leave)
            .filter(|(_, step)| matches!(&step.payload, Payload::Traversal(s) if s.path.is_empty()))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(empties.len(), 1);
        // Only the final Done step follows.
        assert_eq!(empties[0], trace.len() - 2);
    }

    #[test]
    fn test_dfs_ignores_unreachable() {
        let g = graph(&["A", "B", "X"], &[("A", "B")]);
        let traversal = DfsAlgorithm::new("A").run(&g).unwrap().output;
        assert_eq!(names(&traversal.order), vec!["A", "B"]);
        assert_eq!(traversal.components, 1);
    }

    #[test]
    fn test_dfs_all_covers_components() {
        let g = graph(&["A", "B", "X", "Y", "Z"], &[("A", "B"), ("X", "Y")]);
        let traversal = DfsAlgorithm::all().run(&g).unwrap().output;
        assert_eq!(names(&traversal.order), vec!["A", "B", "X", "Y", "Z"]);
        assert_eq!(traversal.components, 3);
    }

    #[test]
    fn test_unknown_start() {
        let g = graph(&["A"], &[]);
        assert_eq!(
            BfsAlgorithm::new("Q").run(&g).unwrap_err(),
            EngineError::UnknownVertex(VertexId::from("Q"))
        );
        assert!(DfsAlgorithm::new("Q").run(&g).is_err());
    }
}
