//! Min-priority queue with stable tie-breaking.
//!
//! `extract_min` always returns the item with the lowest priority. Items with
//! equal priority come out in insertion order (first in, first served), so
//! engines built on the queue produce the same trace on every run.
//!
//! There is no decrease-key: callers re-insert a value with its new priority
//! and skip the stale copy when it surfaces later.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use algotrace_common::utils::error::EngineError;

/// A value together with its priority.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityQueueItem<T> {
    /// The queued value.
    pub value: T,
    /// Its priority (lower is served first).
    pub priority: f64,
}

/// Heap entry; `seq` is the insertion counter used to break ties.
#[derive(Debug)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    value: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // BinaryHeap is a max-heap: reverse both keys so the smallest
    // (priority, seq) pair sits on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A min-priority queue with FIFO tie-breaking.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Inserts a value. The same value may be queued several times with
    /// different priorities.
    pub fn insert(&mut self, value: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            value,
        });
    }

    /// Removes and returns the lowest-priority item.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyQueue`] if the queue is empty.
    pub fn extract_min(&mut self) -> Result<PriorityQueueItem<T>, EngineError> {
        self.pop().ok_or(EngineError::EmptyQueue)
    }

    /// Removes and returns the lowest-priority item, if any.
    pub fn pop(&mut self) -> Option<PriorityQueueItem<T>> {
        self.heap.pop().map(|entry| PriorityQueueItem {
            value: entry.value,
            priority: entry.priority,
        })
    }

    /// Returns the lowest-priority item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.heap.peek().map(|entry| (&entry.value, entry.priority))
    }

    /// Returns the number of queued items, stale copies included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_priority_order() {
        let mut queue = PriorityQueue::new();
        queue.insert("c", 3.0);
        queue.insert("a", 1.0);
        queue.insert("b", 2.0);

        let order: Vec<_> = std::iter::from_fn(|| queue.pop()).map(|i| i.value).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut queue = PriorityQueue::new();
        for name in ["first", "second", "third"] {
            queue.insert(name, 5.0);
        }
        queue.insert("early", 1.0);

        assert_eq!(queue.extract_min().unwrap().value, "early");
        assert_eq!(queue.extract_min().unwrap().value, "first");
        assert_eq!(queue.extract_min().unwrap().value, "second");
        assert_eq!(queue.extract_min().unwrap().value, "third");
    }

    #[test]
    fn test_infinite_priorities_come_last_in_order() {
        let mut queue = PriorityQueue::new();
        queue.insert("x", f64::INFINITY);
        queue.insert("y", f64::INFINITY);
        queue.insert("z", 10.0);

        assert_eq!(queue.pop().unwrap().value, "z");
        assert_eq!(queue.pop().unwrap().value, "x");
        assert_eq!(queue.pop().unwrap().value, "y");
    }

    #[test]
    fn test_duplicate_values_lazy_decrease_key() {
        let mut queue = PriorityQueue::new();
        queue.insert("v", 10.0);
        queue.insert("v", 4.0);
        assert_eq!(queue.len(), 2);

        let fresh = queue.extract_min().unwrap();
        assert_eq!((fresh.value, fresh.priority), ("v", 4.0));
        let stale = queue.extract_min().unwrap();
        assert_eq!((stale.value, stale.priority), ("v", 10.0));
    }

    #[test]
    fn test_extract_min_on_empty_queue() {
        let mut queue: PriorityQueue<u32> = PriorityQueue::default();
        assert_eq!(queue.extract_min(), Err(EngineError::EmptyQueue));
        assert!(queue.peek().is_none());
    }
}
