//! Snapshot-based undo history.
//!
//! Each entry is a full deep copy of the document taken just before a
//! mutating operation. The history is bounded; once full, the oldest
//! snapshot is evicted to make room.

use std::collections::VecDeque;

use zonekit_core::constants::DEFAULT_UNDO_CAPACITY;
use zonekit_core::TerritoryData;

/// Bounded stack of document snapshots.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    snapshots: VecDeque<TerritoryData>,
    capacity: usize,
}

impl UndoHistory {
    /// Create a history with the default capacity (50)
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }

    /// Create with a custom capacity. A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a snapshot, evicting the oldest when full
    pub fn save(&mut self, snapshot: TerritoryData) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Pop the most recent snapshot
    pub fn pop(&mut self) -> Option<TerritoryData> {
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

    /// Change the capacity, dropping the oldest snapshots if needed
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
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
