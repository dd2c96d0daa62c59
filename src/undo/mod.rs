use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Bounded linear undo/redo history over whole snapshots
///
/// Starts with a single seed entry. Adding an entry drops everything ahead
/// of the pointer, so undone changes cannot be redone after a new edit.
/// When full, the oldest entry is evicted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryQueue<T> {
    /// Snapshots, oldest first. Never empty.
    entries: VecDeque<T>,
    /// Index of the current snapshot
    pointer: usize,
    /// Maximum number of snapshots to keep
    capacity: usize,
}

impl<T> HistoryQueue<T> {
    /// Create a history holding only `initial`
    ///
    /// A capacity of 0 is treated as 1.
    pub fn new(initial: T, capacity: usize) -> Self {
        if capacity == 0 {
            log::warn!("history capacity 0 requested, using 1");
        }
        let mut entries = VecDeque::new();
        entries.push_back(initial);
        Self {
            entries,
            pointer: 0,
            capacity: capacity.max(1),
        }
    }

    /// Check if the pointer is at the oldest snapshot (nothing to undo)
    pub fn at_oldest(&self) -> bool {
        self.pointer == 0
    }

    /// Check if the pointer is at the newest snapshot (nothing to redo)
    pub fn at_newest(&self) -> bool {
        self.pointer == self.entries.len() - 1
    }

    /// Step back one snapshot and return it; stays put at the oldest
    pub fn undo(&mut self) -> &T {
        if !self.at_oldest() {
            self.pointer -= 1;
        }
        &self.entries[self.pointer]
    }

    /// Step forward one snapshot and return it; stays put at the newest
    pub fn redo(&mut self) -> &T {
        if !self.at_newest() {
            self.pointer += 1;
        }
        &self.entries[self.pointer]
    }

    /// Record a new snapshot after the current one
    pub fn add(&mut self, item: T) {
        // Truncate any redo history when new snapshot is added
        self.entries.truncate(self.pointer + 1);
        self.entries.push_back(item);
        self.pointer = self.entries.len() - 1;

        // Enforce max size
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.pointer -= 1;
        }
    }

    pub fn current(&self) -> &T {
        &self.entries[self.pointer]
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the seed entry can only be evicted by a newer one
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Get the number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.pointer
    }

    /// Get the number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.entries.len() - 1 - self.pointer
    }
}
