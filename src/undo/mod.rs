//! Undo/redo history for table edits
//!
//! Every mutating operation cascades through several cells and columns,
//! so commands store whole-table snapshots rather than per-cell inverse
//! operations; undo and redo restore the matching snapshot into the live
//! table. View bookkeeping is not part of a snapshot.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{PhonicTable, TableSnapshot};

/// History limit shared with the embedding editor
const DEFAULT_MAX_SIZE: usize = 100;

/// Errors surfaced by the history
#[derive(Error, Clone, Debug, PartialEq)]
pub enum EditError {
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
}

/// One recorded edit: the table before and after
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EditCommand {
    /// Human-readable name of the operation (e.g. "merge left")
    pub description: String,
    before: TableSnapshot,
    after: TableSnapshot,
}

/// Manages undo/redo command history
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UndoStack {
    /// Recorded commands, oldest first
    commands: VecDeque<EditCommand>,
    /// Position in the stack; commands before it are undoable
    current_index: usize,
    /// Maximum number of commands kept
    max_size: usize,
}

impl UndoStack {
    pub fn new() -> Self {
        Self {
            commands: VecDeque::new(),
            current_index: 0,
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Run `op` against the table and record it as one undoable command
    pub fn apply<F>(&mut self, table: &mut PhonicTable, description: &str, op: F)
    where
        F: FnOnce(&mut PhonicTable),
    {
        let before = table.snapshot();
        op(table);
        self.record(description, before, table.snapshot());
    }

    /// Record an already-performed edit
    pub fn record(&mut self, description: &str, before: TableSnapshot, after: TableSnapshot) {
        // a new edit invalidates the redo tail
        self.commands.truncate(self.current_index);

        self.commands.push_back(EditCommand {
            description: description.to_string(),
            before,
            after,
        });
        self.current_index = self.commands.len();

        if self.commands.len() > self.max_size {
            self.commands.pop_front();
            self.current_index -= 1;
        }
    }

    /// Restore the table to the state before the latest command
    pub fn undo(&mut self, table: &mut PhonicTable) -> Result<(), EditError> {
        if !self.can_undo() {
            return Err(EditError::NothingToUndo);
        }
        self.current_index -= 1;
        table.restore(self.commands[self.current_index].before.clone());
        Ok(())
    }

    /// Re-apply the most recently undone command
    pub fn redo(&mut self, table: &mut PhonicTable) -> Result<(), EditError> {
        if !self.can_redo() {
            return Err(EditError::NothingToRedo);
        }
        table.restore(self.commands[self.current_index].after.clone());
        self.current_index += 1;
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_index < self.commands.len()
    }

    /// Drop the whole history (e.g. after a fresh import)
    pub fn clear(&mut self) {
        self.commands.clear();
        self.current_index = 0;
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
