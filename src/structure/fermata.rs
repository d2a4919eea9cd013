//! Fermata collapse and expand
//!
//! A fermata run is a maximal consecutive sequence of `Fermata`-tagged
//! cells in one row, starting at column 1 or later. Column 0 can only
//! ever anchor a run, never belong to one. Collapse folds each run into
//! the `fermata_addition` of the cell on its left and closes the gap;
//! expand re-opens the gap and writes the run back as individual cells.
//! With no other edits in between the two are inverse operations.

use crate::models::{LyricType, PhonicTable, Role};

impl PhonicTable {
    /// Fold every fermata run of every row into its anchor cell
    pub fn collapse_fermata(&mut self) {
        for row in 0..self.row_count() {
            self.collapse_fermata_row(row);
        }
        self.view.mark_table_dirty();
    }

    /// Fold the fermata runs of a single row
    ///
    /// The scan restarts from column 1 after each folded run, since the
    /// gap-closing shift renumbers everything to the right.
    pub fn collapse_fermata_row(&mut self, row: usize) {
        let mut pos = 1;
        while pos < self.column_count {
            if self.lyric_type(row, pos) != LyricType::Fermata {
                pos += 1;
                continue;
            }

            let start = pos;
            while pos < self.column_count && self.lyric_type(row, pos) == LyricType::Fermata {
                pos += 1;
            }

            let addition: Vec<String> = (start..pos)
                .map(|col| self.syllable(row, col).to_string())
                .collect();
            log::debug!(
                "collapsing fermata run of {} at row {} cols {}..{}",
                addition.len(),
                row,
                start,
                pos
            );
            self.set_fermata_addition(row, start - 1, addition.clone());

            // Empty the run before closing the gap: a run touching the
            // last column has no tail to overwrite it, so the shift alone
            // would leave its cells (still Fermata-tagged) in place.
            for col in start..pos {
                self.clear_roles(row, col, Role::ALL);
            }
            for k in 0..addition.len() {
                self.cell_move_left(row, pos - k);
            }

            pos = 1;
        }
        self.view.mark_row_dirty(row);
    }

    /// Re-expand every collapsed run of every row
    pub fn expand_fermata(&mut self) {
        for row in 0..self.row_count() {
            self.expand_fermata_row(row);
        }
        self.view.mark_table_dirty();
    }

    /// Re-expand the collapsed runs of a single row
    ///
    /// When the row has no spare columns for the run, the table grows by
    /// the run's length; otherwise the tail shifts right to open the gap
    /// directly after the anchor. The scan restarts after each expansion.
    pub fn expand_fermata_row(&mut self, row: usize) {
        let mut pos = 0;
        while pos < self.column_count {
            let addition = self.fermata_addition(row, pos).to_vec();
            if !addition.is_empty() {
                if pos + addition.len() + 1 > self.column_count {
                    self.set_column_count(self.column_count + addition.len());
                } else {
                    for _ in 0..addition.len() {
                        self.cell_move_right(row, pos + 1);
                    }
                }

                for (k, text) in addition.iter().enumerate() {
                    self.set_fermata(row, pos + k + 1, text);
                }
                self.clear_roles(row, pos, &[Role::FermataAddition]);

                pos = 0;
            }
            pos += 1;
        }
        self.view.mark_row_dirty(row);
    }

    /// Write one expanded fermata cell: syllable and single candidate are
    /// the run text, tagged `Fermata`; the revised flag is not touched
    fn set_fermata(&mut self, row: usize, col: usize, text: &str) {
        self.set_syllable(row, col, text);
        self.set_candidates(row, col, vec![text.to_string()]);
        self.set_lyric_type(row, col, LyricType::Fermata);
    }
}
