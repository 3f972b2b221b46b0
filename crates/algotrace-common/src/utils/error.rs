//! Error types for Algotrace.
//!
//! Errors are grouped by where they are raised:
//!
//! - [`GraphError`] - input validation in the graph mutators, raised before
//!   any engine runs and always recoverable by correcting the input
//! - [`EngineError`] - precondition and outcome failures of an algorithm run
//! - [`PlaybackError`] - invalid requests to the playback controller
//!
//! A backtracking search that finds no solution is not an error: its trace
//! ends in a distinguished step instead.

use thiserror::Error;

use crate::types::VertexId;

/// Result type alias using the Algotrace error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Algotrace operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid graph input.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// Algorithm run failure.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Playback controller misuse.
    #[error("playback error: {0}")]
    Playback(#[from] PlaybackError),

    /// I/O error (loading graph files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Graph validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge endpoint was never added as a vertex.
    #[error("unknown vertex: {0}")]
    UnknownVertex(VertexId),

    /// Both endpoints of an edge are the same vertex.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),

    /// An edge with the same endpoints already exists.
    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge {
        /// Source endpoint.
        from: VertexId,
        /// Target endpoint.
        to: VertexId,
    },

    /// Edge weight is zero, negative, or not a finite number.
    #[error("edge {from} -> {to} has weight {weight}; weights must be positive and finite")]
    NonPositiveWeight {
        /// Source endpoint.
        from: VertexId,
        /// Target endpoint.
        to: VertexId,
        /// Rejected weight.
        weight: f64,
    },

    /// The graph already holds its configured maximum number of edges.
    #[error("edge limit of {0} reached")]
    EdgeLimitExceeded(usize),
}

/// Algorithm run errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A start or end vertex is not part of the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(VertexId),

    /// `extract_min` was called on an empty priority queue.
    #[error("extract_min on an empty priority queue")]
    EmptyQueue,

    /// The graph has no spanning tree.
    #[error("graph is disconnected: reached {reached} of {total} vertices")]
    Disconnected {
        /// Vertices reached before the frontier ran dry.
        reached: usize,
        /// Total number of vertices.
        total: usize,
    },

    /// An algorithm parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The run recorded more steps than the configured limit.
    #[error("trace exceeded the limit of {0} steps")]
    StepLimitExceeded(usize),
}

/// Playback controller errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// No trace has been loaded.
    #[error("no trace loaded")]
    NoTrace,

    /// Scrubbing was requested while playing; pause first.
    #[error("cannot scrub while playing")]
    Playing,

    /// The requested transition is not valid from the current state.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        /// Requested action.
        action: &'static str,
        /// Current state name.
        state: &'static str,
    },

    /// Playback interval must be at least one millisecond.
    #[error("invalid playback interval: {0} ms")]
    InvalidInterval(u64),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
