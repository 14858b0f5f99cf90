//! Undo history: a bounded stack of full-content snapshots.
//!
//! A snapshot is pushed right before each content-changing edit. Popping
//! hands the content back; cursors are not part of a snapshot, so whoever
//! restores one has to clamp cursor and selection state afterwards.

use std::collections::VecDeque;

/// Snapshots kept when no capacity is configured
pub const DEFAULT_UNDO_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct UndoHistory {
    snapshots: VecDeque<String>,
    capacity: usize,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }

    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a snapshot, evicting the oldest one when full
    pub fn push(&mut self, snapshot: String) {
        if self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Most recent snapshot, None if there is nothing to undo
    pub fn pop(&mut self) -> Option<String> {
        self.snapshots.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}
