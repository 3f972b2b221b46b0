//! The append-only recorder and the finished trace.

use std::fmt;
use std::sync::Arc;

use algotrace_common::utils::error::EngineError;
use serde::{Deserialize, Serialize};

use super::step::{Step, StepKind};

/// Which engine produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Dijkstra shortest path.
    Dijkstra,
    /// Kruskal minimum spanning tree.
    Kruskal,
    /// Prim minimum spanning tree.
    Prim,
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// N-Queens backtracking.
    NQueens,
    /// Graph m-coloring backtracking.
    GraphColoring,
    /// Bubble sort.
    BubbleSort,
    /// Selection sort.
    SelectionSort,
    /// Merge sort.
    MergeSort,
    /// Quick sort.
    QuickSort,
    /// Binary tree traversal.
    TreeTraversal,
}

impl AlgorithmKind {
    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra",
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::NQueens => "N-Queens",
            Self::GraphColoring => "Graph Coloring",
            Self::BubbleSort => "Bubble Sort",
            Self::SelectionSort => "Selection Sort",
            Self::MergeSort => "Merge Sort",
            Self::QuickSort => "Quick Sort",
            Self::TreeTraversal => "Tree Traversal",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ordered, immutable record of one engine run.
///
/// Cloning shares the step buffer, so a trace can be handed to any number of
/// playback controllers and replayed without re-running the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    algorithm: AlgorithmKind,
    steps: Arc<[Step]>,
}

impl Trace {
    /// Wraps a finished step list.
    #[must_use]
    pub fn new(algorithm: AlgorithmKind, steps: Vec<Step>) -> Self {
        Self {
            algorithm,
            steps: steps.into(),
        }
    }

    /// Returns the producing algorithm.
    #[must_use]
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Returns all steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the step at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Returns the final step.
    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns whether the trace has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Counts steps of one kind.
    #[must_use]
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An engine's result together with the trace that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Traced<T> {
    /// The algorithm's answer.
    pub output: T,
    /// How it got there.
    pub trace: Trace,
}

/// Collects steps during one engine run.
#[derive(Debug)]
pub struct TraceRecorder {
    algorithm: AlgorithmKind,
    steps: Vec<Step>,
    limit: Option<usize>,
    log_steps: bool,
}

impl TraceRecorder {
    /// Creates an unbounded recorder.
    #[must_use]
    pub fn new(algorithm: AlgorithmKind) -> Self {
        Self {
            algorithm,
            steps: Vec::new(),
            limit: None,
            log_steps: false,
        }
    }

    /// Caps the number of steps.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Emits a `trace`-level event for every recorded step.
    #[must_use]
    pub fn with_step_logging(mut self, enabled: bool) -> Self {
        self.log_steps = enabled;
        self
    }

    /// Returns the algorithm being recorded.
    #[must_use]
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Appends a step.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepLimitExceeded`] once the configured limit
    /// is reached. The step is not recorded.
    pub fn record(&mut self, step: Step) -> Result<(), EngineError> {
        if let Some(limit) = self.limit
            && self.steps.len() >= limit
        {
            return Err(EngineError::StepLimitExceeded(limit));
        }
        if self.log_steps {
            tracing::trace!(
                algorithm = %self.algorithm,
                index = self.steps.len(),
                kind = %step.kind,
                "{}",
                step.message
            );
        }
        self.steps.push(step);
        Ok(())
    }

    /// Returns the number of steps recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns whether nothing was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the most recent step.
    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Seals the recording into an immutable trace.
    #[must_use]
    pub fn finish(self) -> Trace {
        tracing::debug!(algorithm = %self.algorithm, steps = self.steps.len(), "trace finished");
        Trace::new(self.algorithm, self.steps)
    }

    /// Seals the recording and pairs it with the engine output.
    #[must_use]
    pub fn finish_with<T>(self, output: T) -> Traced<T> {
        Traced {
            output,
            trace: self.finish(),
        }
    }
}
