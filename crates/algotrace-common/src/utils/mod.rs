//! Utility functions and helpers.
//!
//! - [`error`] - Error types shared by every crate
//! - [`hash`] - Hash map and set aliases

pub mod error;
pub mod hash;
