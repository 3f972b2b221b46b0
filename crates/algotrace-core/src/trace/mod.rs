//! Steps and traces.
//!
//! Every engine runs to completion synchronously, appending [`Step`]s to a
//! [`TraceRecorder`] in the exact order the algorithm makes its decisions,
//! and hands back a finished, immutable [`Trace`]. Nothing is paced or
//! interleaved with the consumer: playback happens afterwards, over the
//! materialized trace.
//!
//! ## Contents
//!
//! - [`step`] - a single snapshot: kind, message, highlights, payload
//! - [`payload`] - per-algorithm state carried by a step
//! - [`recorder`] - the append-only recorder and the finished trace

pub mod payload;
pub mod recorder;
pub mod step;

pub use payload::{
    ArrayState, Bucket, CallDetail, CallNode, CallTreeState, ColoringState, Payload, QueensState,
    ShortestPathState, Side, SpanningTreeState, TraversalState, TreeState,
};
pub use recorder::{AlgorithmKind, Trace, TraceRecorder, Traced};
pub use step::{Highlight, Step, StepKind};
