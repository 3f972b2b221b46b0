//! Graph model.
//!
//! A [`Graph`] maps each vertex to an ordered list of `(neighbor, weight)`
//! entries. Undirected edges appear in both endpoints' lists with the same
//! weight. Every iteration (vertices, neighbors, edges) follows insertion
//! order so that traces built on top of it are reproducible.
//!
//! [`GraphSpec`] is the serializable description used by files and the CLI.

mod adjacency;
mod spec;

pub use adjacency::{Edge, Graph, GraphConfig, Neighbor};
pub use spec::{EdgeSpec, GraphSpec};
