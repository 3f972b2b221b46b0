//! # algotrace-core
//!
//! Core layer for Algotrace: the graph model, the supporting data structures
//! the engines are built from, and the step/trace recording types.
//!
//! This crate depends only on `algotrace-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Weighted graph with insertion-ordered adjacency
//! - [`structures`] - Priority queue and disjoint-set
//! - [`tree`] - Arena-backed binary tree for the traversal demos
//! - [`trace`] - Steps, traces, and the recorder engines append to

pub mod graph;
pub mod structures;
pub mod trace;
pub mod tree;

// Re-export commonly used types
pub use graph::{Edge, EdgeSpec, Graph, GraphConfig, GraphSpec, Neighbor};
pub use structures::{DisjointSet, PriorityQueue, PriorityQueueItem};
pub use trace::{AlgorithmKind, Highlight, Payload, Step, StepKind, Trace, TraceRecorder, Traced};
pub use tree::{BinaryTree, TreeNode};
