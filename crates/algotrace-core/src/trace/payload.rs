//! Per-algorithm state carried by a [`Step`](super::Step).
//!
//! Every payload is a full snapshot rather than a delta: a renderer can draw
//! any step on its own, which is what makes backward scrubbing free.

use algotrace_common::types::{Color, VertexId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::graph::Edge;

/// Algorithm-specific state attached to a step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payload {
    /// No state.
    #[default]
    None,
    /// Dijkstra distances and predecessors.
    ShortestPath(ShortestPathState),
    /// Kruskal/Prim accepted edges.
    SpanningTree(SpanningTreeState),
    /// BFS/DFS visited set, frontier and path.
    Traversal(TraversalState),
    /// N-Queens board.
    Queens(QueensState),
    /// Graph coloring assignment.
    Coloring(ColoringState),
    /// Flat array snapshot for in-place sorts.
    Array(ArrayState),
    /// One call of a divide-and-conquer sort.
    CallTree(CallTreeState),
    /// Binary tree traversal progress.
    Tree(TreeState),
}

/// Dijkstra state. `None` distances stand for infinity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathState {
    /// Tentative distance of every vertex.
    pub distances: IndexMap<VertexId, Option<f64>>,
    /// Predecessor on the best known path.
    pub predecessors: IndexMap<VertexId, VertexId>,
    /// Vertices settled so far, in extraction order.
    pub settled: Vec<VertexId>,
    /// Vertex being processed.
    pub current: Option<VertexId>,
    /// Reconstructed path (only on the final step).
    pub path: Vec<VertexId>,
}

/// Spanning tree state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanningTreeState {
    /// Edges accepted so far, in acceptance order.
    pub accepted: Vec<Edge>,
    /// Sum of accepted weights.
    pub total_weight: f64,
    /// Edge under consideration.
    pub candidate: Option<Edge>,
    /// Vertices inside the tree (Prim only).
    pub visited: Vec<VertexId>,
}

/// Graph traversal state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalState {
    /// Visit order so far.
    pub order: Vec<VertexId>,
    /// Queued vertices (BFS).
    pub frontier: Vec<VertexId>,
    /// Active path stack (DFS).
    pub path: Vec<VertexId>,
    /// Hop count from the start (BFS).
    pub levels: IndexMap<VertexId, usize>,
}

/// N-Queens board, one entry per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensState {
    /// Board size.
    pub n: usize,
    /// Row of the queen in each column, if placed.
    pub queens: Vec<Option<usize>>,
}

impl QueensState {
    /// Renders the board as text rows (`Q` for a queen, `.` otherwise).
    #[must_use]
    pub fn board(&self) -> Vec<String> {
        (0..self.n)
            .map(|row| {
                self.queens
                    .iter()
                    .map(|q| if *q == Some(row) { 'Q' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// Graph coloring state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringState {
    /// Colors assigned so far.
    pub assignment: IndexMap<VertexId, Color>,
}

/// Array snapshot for bubble and selection sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayState {
    /// Current contents.
    pub values: Vec<i64>,
    /// Indices being compared or swapped.
    pub compared: Option<(usize, usize)>,
    /// Indices already in their final position.
    pub sorted: Vec<usize>,
}

/// Which half a merged element came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The left half.
    Left,
    /// The right half.
    Right,
}

/// Where a quick sort element landed relative to the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Smaller than the pivot.
    Less,
    /// Equal to the pivot.
    Equal,
    /// Greater than the pivot.
    Greater,
}

/// A call of a recursive sort. Calls are numbered in the order they start;
/// `parent` links rebuild the call tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallNode {
    /// Call id.
    pub id: usize,
    /// Caller id (`None` for the root call).
    pub parent: Option<usize>,
    /// Recursion depth (root is 0).
    pub depth: usize,
    /// Subarray this call received.
    pub input: Vec<i64>,
}

/// What a divide-and-conquer step did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CallDetail {
    /// The input was split into halves.
    Split {
        /// Left half.
        left: Vec<i64>,
        /// Right half.
        right: Vec<i64>,
    },
    /// The input has at most one element.
    Base,
    /// A merge comparison.
    Compare {
        /// Head of the left half.
        left: i64,
        /// Head of the right half.
        right: i64,
        /// Which head was taken.
        taken: Side,
    },
    /// An element was compared to the pivot.
    Classify {
        /// The element.
        value: i64,
        /// The pivot.
        pivot: i64,
        /// Its bucket.
        bucket: Bucket,
    },
    /// The input was partitioned around a pivot.
    Partition {
        /// The pivot (last element).
        pivot: i64,
        /// Elements smaller than the pivot.
        less: Vec<i64>,
        /// Elements equal to the pivot.
        equal: Vec<i64>,
        /// Elements greater than the pivot.
        greater: Vec<i64>,
    },
    /// The call produced its sorted output.
    Combined {
        /// Sorted output.
        result: Vec<i64>,
    },
}

/// Divide-and-conquer step state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTreeState {
    /// The call that emitted the step.
    pub call: CallNode,
    /// What it did.
    pub detail: CallDetail,
}

/// Binary tree traversal state. Nodes are arena indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeState {
    /// Nodes visited so far.
    pub visited: Vec<usize>,
    /// Their values, in the same order.
    pub values: Vec<i64>,
    /// Node being visited.
    pub current: Option<usize>,
}

macro_rules! impl_into_payload {
    ($($state:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$state> for Payload {
                fn from(state: $state) -> Self {
                    Self::$variant(state)
                }
            }
        )*
    };
}

impl_into_payload! {
    ShortestPathState => ShortestPath,
    SpanningTreeState => SpanningTree,
    TraversalState => Traversal,
    QueensState => Queens,
    ColoringState => Coloring,
    ArrayState => Array,
    CallTreeState => CallTree,
    TreeState => Tree,
}
