//! # Algotrace
//!
//! Classic algorithms that record every step they take.
//!
//! Start with [`Visualizer`]: build a graph (or pass an array, a tree, or
//! nothing for N-Queens), run an [`AlgorithmRequest`], and you get back the
//! result together with a [`Trace`]. Hand the trace to a
//! [`PlaybackController`] to step through it, or to a [`Player`] to play it
//! back on a timer.
//!
//! ## Algorithms
//!
//! | Family | Algorithms |
//! | ------ | ---------- |
//! | Shortest path | Dijkstra |
//! | Spanning tree | Kruskal, Prim |
//! | Traversal | BFS, DFS, binary tree orders |
//! | Backtracking | N-Queens, graph coloring |
//! | Sorting | bubble, selection, merge, quick |
//!
//! ## Quick Start
//!
//! ```rust
//! use algotrace::{AlgorithmInput, AlgorithmRequest, EdgeSpec, GraphSpec, Visualizer};
//!
//! let visualizer = Visualizer::new();
//! let graph = visualizer.graph_from_spec(&GraphSpec {
//!     vertices: vec!["A".into(), "B".into(), "C".into()],
//!     edges: vec![EdgeSpec::new("A", "B", 1.0), EdgeSpec::new("B", "C", 2.0)],
//! })?;
//!
//! let traced = visualizer.run(
//!     &AlgorithmRequest::Dijkstra { start: "A".into(), end: "C".into() },
//!     AlgorithmInput::Graph(&graph),
//! )?;
//! println!("{}", traced.output.summary());
//!
//! let mut controller = visualizer.controller(traced.trace);
//! while controller.step_forward()? {
//!     println!("{}", controller.current_step().map_or("", |s| s.message.as_str()));
//! }
//! # Ok::<(), algotrace::Error>(())
//! ```

// Re-export the main runtime API
pub use algotrace_engine::{
    AlgorithmInput, AlgorithmRequest, Config, Outcome, PlaybackController, PlaybackState, Player,
    SharedController, TickId, Visualizer,
};

// Re-export the data model - graphs, trees, and what a trace is made of
pub use algotrace_core::{
    AlgorithmKind, BinaryTree, Edge, EdgeSpec, Graph, GraphConfig, GraphSpec, Highlight, Payload,
    Step, StepKind, Trace, TraceRecorder, Traced,
};

// Re-export identifiers and errors
pub use algotrace_common::{Color, EngineError, Error, GraphError, PlaybackError, Result, VertexId};

// Re-export the engines for direct use
pub use algotrace_adapters::plugins::algorithms::{
    SortKind, TracedAlgorithm, TreeOrder, bfs, dfs, dfs_all, dijkstra, graph_coloring, kruskal,
    n_queens, prim, traverse_tree,
};
