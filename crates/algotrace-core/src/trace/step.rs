//! A single inspectable snapshot of algorithm state.

use std::fmt;

use algotrace_common::types::VertexId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::payload::Payload;

/// What happened in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Initial state before the first decision.
    Init,

    // Shortest path
    /// A vertex was taken off the priority queue.
    Extract,
    /// A relaxation was attempted along an edge.
    Relax,
    /// A relaxation improved a tentative distance.
    Update,
    /// The target was reached and the path reconstructed.
    PathFound,
    /// The target cannot be reached from the source.
    Unreachable,

    // Spanning trees
    /// An edge is under consideration.
    Consider,
    /// An edge joined the tree.
    Accept,
    /// An edge was discarded because it would close a cycle.
    Reject,

    // Traversals
    /// A vertex (or tree node) is being visited.
    Visit,
    /// A new vertex was discovered along an edge.
    Discover,
    /// A vertex was pushed onto the active path.
    Enter,
    /// A vertex was popped off the active path.
    Leave,

    // Backtracking
    /// A candidate placement or color was tried.
    Try,
    /// A candidate was rejected by the safety check.
    Conflict,
    /// A placement or color was undone.
    Backtrack,
    /// The search found a solution.
    Solved,
    /// The search was exhausted without a solution.
    NoSolution,

    // Sorting
    /// Two elements were compared.
    Compare,
    /// Two elements were swapped.
    Swap,
    /// A new minimum candidate was selected.
    Select,
    /// A subarray was split.
    Split,
    /// A subarray needs no further work.
    Base,
    /// Two sorted halves were merged.
    Merge,
    /// A subarray was partitioned around a pivot.
    Partition,

    /// The run finished.
    Done,
}

impl StepKind {
    /// Returns a short lowercase label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Extract => "extract",
            Self::Relax => "relax",
            Self::Update => "update",
            Self::PathFound => "path_found",
            Self::Unreachable => "unreachable",
            Self::Consider => "consider",
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Visit => "visit",
            Self::Discover => "discover",
            Self::Enter => "enter",
            Self::Leave => "leave",
            Self::Try => "try",
            Self::Conflict => "conflict",
            Self::Backtrack => "backtrack",
            Self::Solved => "solved",
            Self::NoSolution => "no_solution",
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::Select => "select",
            Self::Split => "split",
            Self::Base => "base",
            Self::Merge => "merge",
            Self::Partition => "partition",
            Self::Done => "done",
        }
    }

    /// Returns whether this kind ends a trace.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::PathFound | Self::Unreachable | Self::Solved | Self::NoSolution | Self::Done
        )
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Something a renderer should emphasize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// A graph vertex.
    Vertex(VertexId),
    /// A graph edge.
    Edge {
        /// Source endpoint.
        from: VertexId,
        /// Target endpoint.
        to: VertexId,
    },
    /// An array index.
    Index(usize),
    /// A board cell.
    Cell {
        /// Row.
        row: usize,
        /// Column.
        col: usize,
    },
    /// A tree node or call-tree node, by id.
    Node(usize),
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex(v) => write!(f, "{v}"),
            Self::Edge { from, to } => write!(f, "{from}-{to}"),
            Self::Index(i) => write!(f, "[{i}]"),
            Self::Cell { row, col } => write!(f, "({row},{col})"),
            Self::Node(id) => write!(f, "#{id}"),
        }
    }
}

/// One snapshot of an algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// What happened.
    pub kind: StepKind,
    /// Human-readable description.
    pub message: String,
    /// Items to emphasize, without duplicates, in the order added.
    pub highlighted: SmallVec<[Highlight; 2]>,
    /// Algorithm-specific state.
    pub payload: Payload,
}

impl Step {
    /// Creates a step with no highlights and no payload.
    pub fn new(kind: StepKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            highlighted: SmallVec::new(),
            payload: Payload::None,
        }
    }

    /// Adds a highlight (ignored if already present).
    #[must_use]
    pub fn highlight(mut self, item: Highlight) -> Self {
        if !self.highlighted.contains(&item) {
            self.highlighted.push(item);
        }
        self
    }

    /// Highlights a vertex.
    #[must_use]
    pub fn vertex(self, id: &VertexId) -> Self {
        self.highlight(Highlight::Vertex(id.clone()))
    }

    /// Highlights an edge.
    #[must_use]
    pub fn edge(self, from: &VertexId, to: &VertexId) -> Self {
        self.highlight(Highlight::Edge {
            from: from.clone(),
            to: to.clone(),
        })
    }

    /// Highlights array indices.
    #[must_use]
    pub fn indices(self, indices: impl IntoIterator<Item = usize>) -> Self {
        indices
            .into_iter()
            .fold(self, |step, i| step.highlight(Highlight::Index(i)))
    }

    /// Attaches the payload.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Returns whether `id` is highlighted as a vertex.
    #[must_use]
    pub fn highlights_vertex(&self, id: &VertexId) -> bool {
        self.highlighted
            .iter()
            .any(|h| matches!(h, Highlight::Vertex(v) if v == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights_deduplicate() {
        let a = VertexId::from("A");
        let step = Step::new(StepKind::Visit, "visit A").vertex(&a).vertex(&a).indices([1, 1, 2]);
        assert_eq!(step.highlighted.len(), 3);
        assert!(step.highlights_vertex(&a));
    }

    #[test]
    fn test_terminal_kinds() {
        assert!(StepKind::NoSolution.is_terminal());
        assert!(StepKind::PathFound.is_terminal());
        assert!(!StepKind::Backtrack.is_terminal());
        assert_eq!(StepKind::NoSolution.to_string(), "no_solution");
    }
}
