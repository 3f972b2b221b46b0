//! # algotrace-common
//!
//! Foundation layer for Algotrace: identifier types, errors, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Algotrace crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, Color)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{Color, PALETTE, VertexId};
pub use utils::error::{EngineError, Error, GraphError, PlaybackError, Result};
