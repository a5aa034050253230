//! Bounded undo/redo history over opaque surface snapshots.

use std::collections::VecDeque;

/// Maximum number of undo entries retained by default.
pub const HISTORY_CAPACITY: usize = 50;

/// A bounded-depth undo/redo stack.
///
/// Generic over the snapshot type so it stays independent of the surface
/// encoding. The undo stack evicts oldest-first under the capacity; any new
/// recording invalidates the entire redo branch, so history is a line, not
/// a tree.
#[derive(Debug, Clone)]
pub struct History<T> {
    undo: VecDeque<T>,
    redo: Vec<T>,
    capacity: usize,
}

impl<T> History<T> {
    /// New history with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// New history with a custom capacity (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Push a snapshot onto the undo stack.
    ///
    /// Clears the redo stack and evicts the oldest entry once the capacity
    /// is exceeded.
    pub fn record(&mut self, snapshot: T) {
        self.undo.push_back(snapshot);
        if self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Pop the most recent snapshot, parking `current` on the redo stack.
    ///
    /// Returns `None` (and leaves `current` unused) when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Pop the most recent redo snapshot, parking `current` on the undo stack.
    ///
    /// Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo entries currently retained.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of redo entries currently retained.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut history = History::new();
        for i in 0..60 {
            history.record(i);
        }
        assert_eq!(history.undo_depth(), HISTORY_CAPACITY);
        // The 50 most recent snapshots are 10..=59; undoing all of them
        // walks back to 10, never to the evicted 0..10.
        let mut last = None;
        let mut current = 60;
        while history.can_undo() {
            last = history.undo(current);
            current = last.unwrap();
        }
        assert_eq!(last, Some(10));
    }

    #[test]
    fn undo_then_redo_is_identity() {
        let mut history = History::new();
        history.record("before");
        let restored = history.undo("after").unwrap();
        assert_eq!(restored, "before");
        let forward = history.redo(restored).unwrap();
        assert_eq!(forward, "after");
    }

    #[test]
    fn undo_on_empty_is_a_no_op() {
        let mut history: History<u8> = History::new();
        assert_eq!(history.undo(0), None);
        // The current state must not leak onto the redo stack.
        assert!(!history.can_redo());
    }

    #[test]
    fn redo_on_empty_is_a_no_op() {
        let mut history: History<u8> = History::new();
        history.record(1);
        assert_eq!(history.redo(2), None);
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn recording_invalidates_redo_branch() {
        let mut history = History::new();
        history.record(1);
        history.record(2);
        let _ = history.undo(3);
        assert!(history.can_redo());
        history.record(4);
        assert!(!history.can_redo());
    }

    #[test]
    fn custom_capacity_is_respected() {
        let mut history = History::with_capacity(2);
        history.record(1);
        history.record(2);
        history.record(3);
        assert_eq!(history.undo_depth(), 2);
    }
}
