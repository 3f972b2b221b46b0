//! Plugin system for Algotrace.
//!
//! ## Modules
//!
//! - [`algorithms`] - Traced algorithms (shortest path, spanning trees,
//!   traversals, backtracking search, sorting)

pub mod algorithms;

pub use algorithms::TracedAlgorithm;
