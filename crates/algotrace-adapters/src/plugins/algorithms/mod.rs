//! Traced algorithms for Algotrace.
//!
//! Every algorithm runs eagerly to completion, recording each decision into
//! a [`TraceRecorder`](algotrace_core::TraceRecorder). Iteration order always
//! follows input order (vertex and edge insertion order, array order), so
//! running an algorithm twice on the same input yields identical traces.
//!
//! ## Algorithm Categories
//!
//! - [`shortest_path`] - Dijkstra
//! - [`mst`] - Kruskal and Prim
//! - [`traversal`] - BFS and DFS
//! - [`backtracking`] - N-Queens and graph m-coloring
//! - [`sorting`] - Bubble, selection, merge and quick sort
//! - [`tree_traversal`] - Pre/in/post/level-order binary tree walks
//!
//! ## Usage
//!
//! ```ignore
//! use algotrace_adapters::plugins::algorithms::{DijkstraAlgorithm, TracedAlgorithm};
//! use algotrace_core::Graph;
//!
//! let mut graph = Graph::new();
//! // ... populate graph ...
//!
//! let traced = DijkstraAlgorithm::new("A", "D").run(&graph)?;
//! println!("{} steps, distance {}", traced.trace.len(), traced.output.distance);
//! ```

pub mod backtracking;
pub mod mst;
pub mod shortest_path;
pub mod sorting;
pub mod traversal;
pub mod tree_traversal;
mod traits;

// Core trait
pub use traits::TracedAlgorithm;

// Shortest path
pub use shortest_path::{DijkstraAlgorithm, ShortestPath, dijkstra};

// Minimum spanning trees
pub use mst::{KruskalAlgorithm, PrimAlgorithm, SpanningTree, kruskal, prim};

// Graph traversal
pub use traversal::{BfsAlgorithm, DfsAlgorithm, Traversal, bfs, dfs, dfs_all};

// Backtracking search
pub use backtracking::{
    ColoringSolution, GraphColoringAlgorithm, NQueensAlgorithm, QueensSolution, graph_coloring,
    n_queens, solve_n_queens,
};

// Sorting
pub use sorting::{SortAlgorithm, SortKind, bubble_sort, merge_sort, quick_sort, selection_sort};

// Tree traversal
pub use tree_traversal::{TreeOrder, TreeTraversalAlgorithm, traverse_tree};
