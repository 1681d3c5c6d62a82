//! Edit history (undo/redo)

use crate::messages::EditEvent;

/// Default cap on the number of undoable edits kept per document
pub const DEFAULT_UNDO_LIMIT: usize = 1000;

/// One committed edit: the event that was applied and the event that
/// reverts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    /// Replayed by redo
    pub forward: EditEvent,
    /// Replayed by undo
    pub backward: EditEvent,
}

impl Revision {
    pub fn new(forward: EditEvent, backward: EditEvent) -> Self {
        Self { forward, backward }
    }
}

/// Undo/redo stacks.
///
/// A fresh commit only grows the undo stack; the redo stack is fed
/// exclusively by `pop_undo` and drained by `pop_redo`.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<Revision>,
    redo_stack: Vec<Revision>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_UNDO_LIMIT)
    }

    /// Create a new edit history with specified max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record a committed edit
    pub fn push(&mut self, revision: Revision) {
        self.undo_stack.push(revision);
        self.trim();
    }

    /// Take the most recent edit to revert; it moves onto the redo stack
    pub fn pop_undo(&mut self) -> Option<Revision> {
        let revision = self.undo_stack.pop()?;
        self.redo_stack.push(revision);
        Some(revision)
    }

    /// Take the most recently reverted edit; it moves back onto the undo stack
    pub fn pop_redo(&mut self) -> Option<Revision> {
        let revision = self.redo_stack.pop()?;
        self.undo_stack.push(revision);
        self.trim();
        Some(revision)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of operations in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of operations in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    fn trim(&mut self) {
        if self.undo_stack.len() > self.max_size {
            let excess = self.undo_stack.len() - self.max_size;
            self.undo_stack.drain(..excess);
        }
    }
}
