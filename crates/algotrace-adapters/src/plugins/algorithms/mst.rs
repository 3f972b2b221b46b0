//! Minimum spanning trees: Kruskal and Prim.
//!
//! Both treat every edge as undirected. Ties between equal weights go to the
//! edge inserted first.

use algotrace_common::types::VertexId;
use algotrace_common::utils::error::EngineError;
use algotrace_common::utils::hash::FxHashSet;
use algotrace_core::trace::SpanningTreeState;
use algotrace_core::{AlgorithmKind, DisjointSet, Edge, Graph, Step, StepKind, TraceRecorder};
use serde::Serialize;

use super::traits::TracedAlgorithm;

/// Result of a spanning tree algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    /// Accepted edges in acceptance order.
    pub edges: Vec<Edge>,
    /// Sum of accepted weights.
    pub total_weight: f64,
    /// Whether the edges span every vertex. Kruskal on a disconnected graph
    /// returns a spanning forest with this set to `false`.
    pub spanning: bool,
}

fn edge_label(edge: &Edge) -> String {
    format!("{}-{} ({})", edge.from, edge.to, edge.weight)
}

// === Kruskal ===

/// Builds a minimum spanning tree (or forest) with Kruskal's algorithm.
///
/// Edges are scanned by ascending weight; an edge is accepted when it joins
/// two different components and rejected when it would close a cycle. Both
/// outcomes are recorded.
pub fn kruskal(graph: &Graph, recorder: &mut TraceRecorder) -> Result<SpanningTree, EngineError> {
    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    // Stable sort keeps insertion order among equal weights.
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut components: DisjointSet<VertexId> = graph.vertices().cloned().collect();
    let mut state = SpanningTreeState::default();
    recorder.record(
        Step::new(
            StepKind::Init,
            format!("Sorted {} edges by weight", sorted.len()),
        )
        .with_payload(state.clone()),
    )?;

    for edge in sorted {
        state.candidate = Some(edge.clone());
        if components.union(&edge.from, &edge.to) {
            state.accepted.push(edge.clone());
            state.total_weight += edge.weight;
            recorder.record(
                Step::new(
                    StepKind::Accept,
                    format!("Added edge {} to MST", edge_label(edge)),
                )
                .edge(&edge.from, &edge.to)
                .with_payload(state.clone()),
            )?;
        } else {
            recorder.record(
                Step::new(
                    StepKind::Reject,
                    format!("Skipped edge {}: would form a cycle", edge_label(edge)),
                )
                .edge(&edge.from, &edge.to)
                .with_payload(state.clone()),
            )?;
        }
    }

    state.candidate = None;
    let spanning = components.set_count() <= 1;
    let message = if spanning {
        format!("MST complete: total weight {}", state.total_weight)
    } else {
        format!(
            "Graph is disconnected: spanning forest of {} components, total weight {}",
            components.set_count(),
            state.total_weight
        )
    };
    recorder.record(Step::new(StepKind::Done, message).with_payload(state.clone()))?;

    Ok(SpanningTree {
        edges: state.accepted,
        total_weight: state.total_weight,
        spanning,
    })
}

// === Prim ===

/// Builds a minimum spanning tree with Prim's algorithm.
///
/// Grows from the first vertex in insertion order. Each round scans the edge
/// list for edges with exactly one endpoint inside the tree and takes the
/// lightest; the first such edge wins a tie.
///
/// # Errors
///
/// [`EngineError::Disconnected`] if some vertex cannot be reached.
pub fn prim(graph: &Graph, recorder: &mut TraceRecorder) -> Result<SpanningTree, EngineError> {
    let total = graph.vertex_count();
    let mut state = SpanningTreeState::default();
    let Some(start) = graph.vertex_at(0) else {
        recorder.record(Step::new(StepKind::Done, "Graph is empty"))?;
        return Ok(SpanningTree {
            edges: Vec::new(),
            total_weight: 0.0,
            spanning: true,
        });
    };

    let mut inside = FxHashSet::default();
    inside.insert(start.clone());
    state.visited.push(start.clone());
    recorder.record(
        Step::new(StepKind::Init, format!("Starting from {start}"))
            .vertex(start)
            .with_payload(state.clone()),
    )?;

    while inside.len() < total {
        let crossing = graph
            .edges()
            .iter()
            .filter(|e| inside.contains(&e.from) != inside.contains(&e.to))
            .fold(None::<&Edge>, |best, e| match best {
                Some(b) if b.weight <= e.weight => Some(b),
                _ => Some(e),
            });

        let Some(edge) = crossing else {
            tracing::debug!(reached = inside.len(), total, "prim stopped: graph is disconnected");
            return Err(EngineError::Disconnected {
                reached: inside.len(),
                total,
            });
        };

        let next = if inside.contains(&edge.from) {
            &edge.to
        } else {
            &edge.from
        };
        inside.insert(next.clone());
        state.visited.push(next.clone());
        state.accepted.push(edge.clone());
        state.total_weight += edge.weight;
        recorder.record(
            Step::new(
                StepKind::Accept,
                format!("Added edge {} reaching {next}", edge_label(edge)),
            )
            .edge(&edge.from, &edge.to)
            .vertex(next)
            .with_payload(state.clone()),
        )?;
    }

    recorder.record(
        Step::new(
            StepKind::Done,
            format!("MST complete: total weight {}", state.total_weight),
        )
        .with_payload(state.clone()),
    )?;

    Ok(SpanningTree {
        edges: state.accepted,
        total_weight: state.total_weight,
        spanning: true,
    })
}

/// Kruskal as a [`TracedAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KruskalAlgorithm;

impl TracedAlgorithm for KruskalAlgorithm {
    type Input = Graph;
    type Output = SpanningTree;

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Kruskal
    }

    fn execute(
        &self,
        input: &Graph,
        recorder: &mut TraceRecorder,
    ) -> Result<SpanningTree, EngineError> {
        kruskal(input, recorder)
    }
}

/// Prim as a [`TracedAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimAlgorithm;

impl TracedAlgorithm for PrimAlgorithm {
    type Input = Graph;
    type Output = SpanningTree;

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Prim
    }

    fn execute(
        &self,
        input: &Graph,
        recorder: &mut TraceRecorder,
    ) -> Result<SpanningTree, EngineError> {
        prim(input, recorder)
    }
}
