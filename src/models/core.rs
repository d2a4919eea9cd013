//! Core data structures for the phonetic lyric table
//!
//! This module defines the Cell record carrying the five per-cell roles
//! and the PhonicTable grid that owns storage and shape management.
//! Edit operations over the grid live in `crate::structure`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::elements::{LyricType, Role};

/// One cell of the lyric table, holding the full role bundle
///
/// An empty `syllable` is the canonical "this cell is unoccupied" signal;
/// an empty `fermata_addition` means no collapsed run is attached.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Cell {
    /// Display text of the syllable
    pub syllable: String,

    /// Ordered candidate readings for the syllable
    pub candidates: Vec<String>,

    /// Marks a user-corrected syllable
    pub revised: bool,

    /// Phonetic class tag
    pub lyric_type: LyricType,

    /// Collapsed fermata run attached to this cell (anchor cells only)
    pub fermata_addition: Vec<String>,
}

impl Cell {
    /// Create an occupied cell with the given text and class
    pub fn new(syllable: impl Into<String>, lyric_type: LyricType) -> Self {
        Self {
            syllable: syllable.into(),
            lyric_type,
            ..Default::default()
        }
    }

    /// Whether this cell holds no syllable
    pub fn is_empty(&self) -> bool {
        self.syllable.is_empty()
    }
}

/// Pending change notification for the presentation layer
///
/// Mutating operations mark rows (or the whole table) dirty; the embedding
/// layer drains the flags synchronously after each edit and re-renders.
/// Observers must not re-enter the table while reacting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Whole-table refresh requested (structural edits)
    pub table_dirty: bool,

    /// Rows with changed content, in marking order
    pub dirty_rows: Vec<usize>,
}

impl ViewState {
    /// Request a whole-table refresh
    pub fn mark_table_dirty(&mut self) {
        self.table_dirty = true;
    }

    /// Request a refresh of a single row
    pub fn mark_row_dirty(&mut self, row: usize) {
        if !self.dirty_rows.contains(&row) {
            self.dirty_rows.push(row);
        }
    }

    /// Whether any refresh is pending
    pub fn is_dirty(&self) -> bool {
        self.table_dirty || !self.dirty_rows.is_empty()
    }

    /// Drain the pending notification
    pub fn take(&mut self) -> ViewState {
        std::mem::take(self)
    }
}

/// Persistent shape and content of a table, without view bookkeeping
///
/// Used by the undo history and by tests to compare tables for equality
/// independent of pending refresh flags.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TableSnapshot {
    pub rows: Vec<Vec<Cell>>,
    pub column_count: usize,
    pub model_max_col: usize,
}

/// Structural validation failures
#[derive(Error, Clone, Debug, PartialEq)]
pub enum TableError {
    #[error("row {row} holds {len} cells, expected {expected}")]
    RowWidth {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// The 2-D grid of lyric cells
///
/// Every row vector is physically sized to `column_count`; reads beyond
/// that bound return the role's zero value and writes beyond it are
/// ignored. Growing the grid is the job of the shape-management calls,
/// never of the storage accessors.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PhonicTable {
    /// Ordered lyric lines, one vector of cells per line
    pub rows: Vec<Vec<Cell>>,

    /// Shared width of every row
    pub column_count: usize,

    /// Cached column index of the longest occupied row; recomputed by
    /// [`PhonicTable::shrink`]
    pub model_max_col: usize,

    /// Pending presentation-layer notification
    #[serde(skip)]
    pub view: ViewState,
}

impl PhonicTable {
    /// Create an empty table with zero rows and zero columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from imported rows, padding every row to a uniform
    /// width and shrinking to content
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let column_count = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut table = Self {
            rows,
            column_count,
            model_max_col: 0,
            view: ViewState::default(),
        };
        for row in &mut table.rows {
            row.resize(column_count, Cell::default());
        }
        table.shrink();
        table
    }

    /// Number of lyric lines
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    // ------------------------------------------------------------------
    // Role storage: bounds-checked reads with zero-value defaults,
    // bounds-checked writes that never grow the grid
    // ------------------------------------------------------------------

    /// The cell at (row, col), if it is inside the current bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Syllable text at (row, col); empty past the end
    pub fn syllable(&self, row: usize, col: usize) -> &str {
        self.cell(row, col).map(|c| c.syllable.as_str()).unwrap_or("")
    }

    /// Candidate readings at (row, col); empty past the end
    pub fn candidates(&self, row: usize, col: usize) -> &[String] {
        self.cell(row, col).map(|c| c.candidates.as_slice()).unwrap_or(&[])
    }

    /// Revised flag at (row, col); false past the end
    pub fn revised(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).map(|c| c.revised).unwrap_or(false)
    }

    /// Phonetic class at (row, col); `Normal` past the end
    pub fn lyric_type(&self, row: usize, col: usize) -> LyricType {
        self.cell(row, col).map(|c| c.lyric_type).unwrap_or_default()
    }

    /// Fermata addition at (row, col); empty past the end
    pub fn fermata_addition(&self, row: usize, col: usize) -> &[String] {
        self.cell(row, col)
            .map(|c| c.fermata_addition.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_syllable(&mut self, row: usize, col: usize, syllable: impl Into<String>) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.syllable = syllable.into();
        }
    }

    pub fn set_candidates(&mut self, row: usize, col: usize, candidates: Vec<String>) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.candidates = candidates;
        }
    }

    pub fn set_revised(&mut self, row: usize, col: usize, revised: bool) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.revised = revised;
        }
    }

    pub fn set_lyric_type(&mut self, row: usize, col: usize, lyric_type: LyricType) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.lyric_type = lyric_type;
        }
    }

    pub fn set_fermata_addition(&mut self, row: usize, col: usize, addition: Vec<String>) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.fermata_addition = addition;
        }
    }

    /// Zero the named roles at (row, col)
    ///
    /// Out-of-range addresses are ignored.
    pub fn clear_roles(&mut self, row: usize, col: usize, roles: &[Role]) {
        if let Some(cell) = self.cell_mut(row, col) {
            for role in roles {
                match role {
                    Role::Syllable => cell.syllable.clear(),
                    Role::Candidates => cell.candidates.clear(),
                    Role::Revised => cell.revised = false,
                    Role::LyricType => cell.lyric_type = LyricType::default(),
                    Role::FermataAddition => cell.fermata_addition.clear(),
                }
            }
        }
    }

    /// Move the named roles from (row, col) to (tar_row, tar_col),
    /// zeroing them at the source
    ///
    /// A move from past the end writes the zero values into the target;
    /// a move to past the end only clears the source.
    pub fn move_roles(
        &mut self,
        row: usize,
        col: usize,
        tar_row: usize,
        tar_col: usize,
        roles: &[Role],
    ) {
        for role in roles {
            match role {
                Role::Syllable => {
                    let value = self.syllable_owned(row, col);
                    self.set_syllable(tar_row, tar_col, value);
                }
                Role::Candidates => {
                    let value = self
                        .cell_mut(row, col)
                        .map(|c| std::mem::take(&mut c.candidates))
                        .unwrap_or_default();
                    self.set_candidates(tar_row, tar_col, value);
                }
                Role::Revised => {
                    let value = self
                        .cell_mut(row, col)
                        .map(|c| std::mem::replace(&mut c.revised, false))
                        .unwrap_or(false);
                    self.set_revised(tar_row, tar_col, value);
                }
                Role::LyricType => {
                    let value = self
                        .cell_mut(row, col)
                        .map(|c| std::mem::take(&mut c.lyric_type))
                        .unwrap_or_default();
                    self.set_lyric_type(tar_row, tar_col, value);
                }
                Role::FermataAddition => {
                    let value = self
                        .cell_mut(row, col)
                        .map(|c| std::mem::take(&mut c.fermata_addition))
                        .unwrap_or_default();
                    self.set_fermata_addition(tar_row, tar_col, value);
                }
            }
        }
    }

    fn syllable_owned(&mut self, row: usize, col: usize) -> String {
        self.cell_mut(row, col)
            .map(|c| std::mem::take(&mut c.syllable))
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Shape management
    // ------------------------------------------------------------------

    /// Resize every row to `n` columns
    ///
    /// Growing pads with empty cells; shrinking truncates, so callers must
    /// first establish that the truncated columns hold no content.
    pub fn set_column_count(&mut self, n: usize) {
        for row in &mut self.rows {
            row.resize(n, Cell::default());
        }
        self.column_count = n;
    }

    /// Insert an empty row at index `i`, shifting later rows down
    pub fn insert_row(&mut self, i: usize) {
        self.rows.insert(i, vec![Cell::default(); self.column_count]);
    }

    /// Remove the row at index `i`, shifting later rows up
    pub fn remove_row(&mut self, i: usize) {
        self.rows.remove(i);
    }

    /// Rightmost column index in `row` with a non-empty syllable,
    /// scanning right to left; 0 if the row is entirely empty
    pub fn line_length(&self, row: usize) -> usize {
        for col in (0..self.column_count).rev() {
            if !self.syllable(row, col).is_empty() {
                return col;
            }
        }
        0
    }

    /// Recompute `model_max_col` from content and drop excess empty columns
    ///
    /// A zero-row table is left untouched.
    pub fn shrink(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let mut max_col = 0;
        for row in 0..self.row_count() {
            max_col = max_col.max(self.line_length(row));
        }
        self.model_max_col = max_col;
        self.set_column_count(self.model_max_col + 1);
    }

    // ------------------------------------------------------------------
    // Snapshots and validation
    // ------------------------------------------------------------------

    /// Capture the persistent state, excluding view bookkeeping
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            rows: self.rows.clone(),
            column_count: self.column_count,
            model_max_col: self.model_max_col,
        }
    }

    /// Replace the persistent state from a snapshot
    pub fn restore(&mut self, snapshot: TableSnapshot) {
        self.rows = snapshot.rows;
        self.column_count = snapshot.column_count;
        self.model_max_col = snapshot.model_max_col;
        self.view.mark_table_dirty();
    }

    /// Check that every row is physically sized to the shared column count
    pub fn validate(&self) -> Result<(), TableError> {
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != self.column_count {
                return Err(TableError::RowWidth {
                    row,
                    len: cells.len(),
                    expected: self.column_count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_cell_row() -> PhonicTable {
        PhonicTable::from_rows(vec![vec![
            Cell::new("a", LyricType::Normal),
            Cell::new("b", LyricType::Normal),
            Cell::new("c", LyricType::Normal),
        ]])
    }

    #[test]
    fn reads_past_the_end_return_zero_values() {
        let table = three_cell_row();

        assert_eq!(table.syllable(0, 99), "");
        assert_eq!(table.candidates(0, 99), &[] as &[String]);
        assert!(!table.revised(0, 99));
        assert_eq!(table.lyric_type(0, 99), LyricType::Normal);
        assert!(table.fermata_addition(5, 0).is_empty());
    }

    #[test]
    fn writes_past_the_end_are_ignored() {
        let mut table = three_cell_row();

        table.set_syllable(0, 99, "x");
        table.set_revised(9, 0, true);

        assert_eq!(table.column_count, 3);
        assert_eq!(table.row_count(), 1);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn move_roles_transfers_the_full_bundle() {
        let mut table = three_cell_row();
        table.set_candidates(0, 1, vec!["bo".into()]);
        table.set_revised(0, 1, true);
        table.set_lyric_type(0, 1, LyricType::Letter);

        table.move_roles(0, 1, 0, 2, Role::ALL);

        assert_eq!(table.syllable(0, 1), "");
        assert!(table.candidates(0, 1).is_empty());
        assert!(!table.revised(0, 1));
        assert_eq!(table.lyric_type(0, 1), LyricType::Normal);

        assert_eq!(table.syllable(0, 2), "b");
        assert_eq!(table.candidates(0, 2), &["bo".to_string()]);
        assert!(table.revised(0, 2));
        assert_eq!(table.lyric_type(0, 2), LyricType::Letter);
    }

    #[test]
    fn move_roles_can_restrict_to_a_subset() {
        let mut table = three_cell_row();
        table.set_revised(0, 0, true);

        table.move_roles(0, 0, 0, 1, &[Role::Syllable, Role::LyricType]);

        // revised stays behind, syllable moved
        assert!(table.revised(0, 0));
        assert_eq!(table.syllable(0, 0), "");
        assert_eq!(table.syllable(0, 1), "a");
    }

    #[test]
    fn shrink_recomputes_max_col_and_truncates() {
        let mut table = three_cell_row();
        table.set_column_count(10);
        assert_eq!(table.column_count, 10);

        table.shrink();

        assert_eq!(table.model_max_col, 2);
        assert_eq!(table.column_count, 3);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn shrink_on_empty_table_is_a_noop() {
        let mut table = PhonicTable::new();
        table.shrink();

        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count, 0);
    }

    #[test]
    fn line_length_of_blank_row_is_zero() {
        let mut table = three_cell_row();
        table.insert_row(1);

        assert_eq!(table.line_length(0), 2);
        assert_eq!(table.line_length(1), 0);
    }

    #[test]
    fn validate_rejects_ragged_rows() {
        let mut table = three_cell_row();
        table.rows[0].pop();

        assert_eq!(
            table.validate(),
            Err(TableError::RowWidth {
                row: 0,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let mut table = three_cell_row();
        let saved = table.snapshot();

        table.set_syllable(0, 0, "zzz");
        table.set_column_count(7);
        table.restore(saved.clone());

        assert_eq!(table.snapshot(), saved);
        assert!(table.view.table_dirty);
    }
}
