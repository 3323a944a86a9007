// src/queue/priority.rs
//! Ascending priority queue with FIFO order among equal priorities.
//!
//! The observable order matches an insertion-sorted list where a new entry
//! goes after every entry whose priority is not greater than its own. Entries
//! are kept in a binary heap keyed by `(priority, arrival)` so both operations
//! stay logarithmic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{GraphError, Result};

/// A dequeued element and the priority it was queued with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T, P> {
    pub element: T,
    pub priority: P,
}

#[derive(Debug)]
struct Slot<T, P> {
    priority: P,
    arrival: u64,
    element: T,
}

impl<T, P: Ord> PartialEq for Slot<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Slot<T, P> {}

impl<T, P: Ord> PartialOrd for Slot<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Slot<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.arrival.cmp(&other.arrival))
    }
}

#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Reverse<Slot<T, P>>>,
    arrivals: u64,
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            arrivals: 0,
        }
    }

    /// Queues `element`. An element already queued is not updated; the new
    /// entry is added alongside the old one.
    pub fn enqueue(&mut self, element: T, priority: P) {
        let arrival = self.arrivals;
        self.arrivals += 1;
        self.heap.push(Reverse(Slot {
            priority,
            arrival,
            element,
        }));
    }

    /// Removes the entry with the lowest priority, earliest arrival first.
    ///
    /// # Errors
    /// Returns `GraphError::EmptyQueue` when nothing is queued.
    pub fn dequeue(&mut self) -> Result<Entry<T, P>> {
        let Reverse(slot) = self.heap.pop().ok_or(GraphError::EmptyQueue)?;
        Ok(Entry {
            element: slot.element,
            priority: slot.priority,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
