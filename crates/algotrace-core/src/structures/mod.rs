//! Supporting data structures for the engines.
//!
//! - [`PriorityQueue`] - min-queue with stable FIFO tie-breaking and lazy
//!   decrease-key
//! - [`DisjointSet`] - union-find with path compression and union by rank

mod disjoint_set;
mod priority_queue;

pub use disjoint_set::DisjointSet;
pub use priority_queue::{PriorityQueue, PriorityQueueItem};
