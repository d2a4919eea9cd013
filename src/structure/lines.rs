//! Line-level edit operations
//!
//! These compose the cell operations with shape management: splitting a
//! line at a cell, merging a line into the one above, and inserting or
//! removing whole lines. Structural edits flag the whole table for
//! refresh since row indices shift.

use crate::models::{PhonicTable, Role};

impl PhonicTable {
    /// Split `row` at `col`: everything from `col` rightward moves to a
    /// fresh line directly below, starting at column 0
    pub fn cell_new_line(&mut self, row: usize, col: usize) {
        self.insert_row(row + 1);
        for i in col..self.column_count {
            self.move_roles(row, i, row + 1, i - col, Role::ALL);
        }
        self.shrink();
        self.view.mark_table_dirty();
    }

    /// Merge `row` into the line above and remove it
    ///
    /// The moved content lands one column past the upper line's rightmost
    /// occupied cell. The capacity formula reserves one extra column past
    /// the combined content; the resulting layout is relied on downstream,
    /// so both the `+ 2` growth and the bare `set_column_count(model_max_col)`
    /// are kept as-is. Requires `row ≥ 1`.
    pub fn cell_merge_up(&mut self, row: usize) {
        debug_assert!(row > 0, "cell_merge_up needs a line above");

        let last_col = self.line_length(row - 1);
        let current_col = self.line_length(row);

        self.model_max_col = self.model_max_col.max(last_col + current_col + 2);
        if self.model_max_col + 1 > self.column_count {
            self.set_column_count(self.model_max_col);
        }

        for i in 0..=current_col {
            self.move_roles(row, i, row - 1, last_col + i + 1, Role::ALL);
        }

        self.remove_row(row);
        self.view.mark_table_dirty();
    }

    /// Insert an empty line directly above `row`
    pub fn add_prev_line(&mut self, row: usize) {
        self.insert_row(row);
        self.view.mark_table_dirty();
    }

    /// Insert an empty line directly below `row`
    pub fn add_next_line(&mut self, row: usize) {
        self.insert_row(row + 1);
        self.view.mark_table_dirty();
    }

    /// Remove `row` and drop any columns left empty by it
    pub fn remove_line(&mut self, row: usize) {
        self.remove_row(row);
        self.shrink();
        self.view.mark_table_dirty();
    }
}
