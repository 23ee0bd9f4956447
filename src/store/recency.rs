//! Recency Tracker Module
//!
//! Tracks access order over record ids for LRU eviction.

use std::collections::VecDeque;

// == Recency Tracker ==
/// Orders record ids by last access for eviction selection.
///
/// Ids are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Both reads and writes count as use (LRU, not LFU).
#[derive(Debug, Default)]
pub struct RecencyTracker {
    /// Order of ids by access time
    order: VecDeque<String>,
}

impl RecencyTracker {
    // == Constructor ==
    /// Creates a new empty recency tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks an id as most recently used (moves to front).
    ///
    /// If the id is already tracked it is moved; otherwise it is added.
    pub fn touch(&mut self, id: &str) {
        self.remove(id);
        self.order.push_front(id.to_string());
    }

    // == Remove ==
    /// Removes an id from the tracker.
    pub fn remove(&mut self, id: &str) {
        self.order.retain(|k| k != id);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used id.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the least recently used id without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.back()
    }

    // == Length ==
    /// Returns the number of tracked ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if an id is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, id: &str) -> bool {
        self.order.iter().any(|k| k == id)
    }
}
