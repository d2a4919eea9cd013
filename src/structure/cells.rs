//! Cell-level edit operations
//!
//! Each operation addresses a single (row, col) and moves or clears the
//! full role bundle transactionally; a logical cell is never left split
//! across two physical cells. Addressing is trusted per the caller
//! contract; the embedding layer disables actions whose preconditions do
//! not hold.

use crate::models::{PhonicTable, Role};

impl PhonicTable {
    /// Zero every role at (row, col)
    pub fn cell_clear(&mut self, row: usize, col: usize) {
        self.clear_roles(row, col, Role::ALL);
        self.view.mark_row_dirty(row);
    }

    /// Shift the tail starting at `col` one position left
    ///
    /// Every bundle from `col` rightward moves one column toward the
    /// start, overwriting the previous occupant of `col - 1`. Called with
    /// `col` at or past the column count (or at 0), this is a no-op.
    pub fn cell_move_left(&mut self, row: usize, col: usize) {
        if col > 0 {
            for i in col..self.column_count {
                self.move_roles(row, i, row, i - 1, Role::ALL);
            }
        }
        self.view.mark_row_dirty(row);
    }

    /// Open a gap at `col`, shifting the tail one position right
    ///
    /// If the last column is occupied the table first grows by one column
    /// so no content falls off the edge.
    pub fn cell_move_right(&mut self, row: usize, col: usize) {
        let max_col = self.column_count.saturating_sub(1);
        if !self.syllable(row, max_col).is_empty() {
            self.set_column_count(max_col + 2);
        }
        for i in ((col + 1)..self.column_count).rev() {
            self.move_roles(row, i - 1, row, i, Role::ALL);
        }
        self.view.mark_row_dirty(row);
    }

    /// Concatenate the syllable at `col` onto its left neighbour
    ///
    /// Only the display text is concatenated; the other roles of
    /// `col - 1` stay as they are. The vacated cell collapses by shifting
    /// the remaining tail left, then the whole table is flagged for
    /// refresh. Requires `col ≥ 1`.
    pub fn cell_merge_left(&mut self, row: usize, col: usize) {
        debug_assert!(col > 0, "cell_merge_left needs a left neighbour");

        let merged = format!("{}{}", self.syllable(row, col - 1), self.syllable(row, col));
        self.set_syllable(row, col - 1, merged);

        self.cell_move_left(row, col + 1);
        self.view.mark_table_dirty();
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Cell, LyricType, PhonicTable};

    fn row_of(syllables: &[&str]) -> PhonicTable {
        PhonicTable::from_rows(vec![syllables
            .iter()
            .map(|s| Cell::new(*s, LyricType::Normal))
            .collect()])
    }

    fn syllables(table: &PhonicTable, row: usize) -> Vec<String> {
        (0..table.column_count)
            .map(|col| table.syllable(row, col).to_string())
            .collect()
    }

    #[test]
    fn clear_zeroes_the_full_bundle() {
        let mut table = row_of(&["a", "b"]);
        table.set_revised(0, 0, true);
        table.set_candidates(0, 0, vec!["aa".into()]);

        table.cell_clear(0, 0);

        assert_eq!(table.syllable(0, 0), "");
        assert!(table.candidates(0, 0).is_empty());
        assert!(!table.revised(0, 0));
        assert_eq!(table.view.dirty_rows, vec![0]);
    }

    #[test]
    fn move_left_shifts_tail_and_discards_left_neighbour() {
        let mut table = row_of(&["a", "b", "c"]);

        table.cell_move_left(0, 1);

        assert_eq!(syllables(&table, 0), vec!["b", "c", ""]);
    }

    #[test]
    fn move_left_at_column_zero_is_a_noop() {
        let mut table = row_of(&["a", "b"]);

        table.cell_move_left(0, 0);

        assert_eq!(syllables(&table, 0), vec!["a", "b"]);
    }

    #[test]
    fn move_left_from_past_the_end_is_a_noop() {
        let mut table = row_of(&["a", "b"]);

        table.cell_move_left(0, table.column_count);

        assert_eq!(syllables(&table, 0), vec!["a", "b"]);
    }

    #[test]
    fn move_right_opens_a_gap_and_grows_when_full() {
        let mut table = row_of(&["a", "b"]);

        table.cell_move_right(0, 0);

        assert_eq!(table.column_count, 3);
        assert_eq!(syllables(&table, 0), vec!["", "a", "b"]);
    }

    #[test]
    fn move_right_reuses_trailing_space_without_growing() {
        let mut table = row_of(&["a", "b", "c"]);
        table.set_column_count(5);

        table.cell_move_right(0, 1);

        assert_eq!(table.column_count, 5);
        assert_eq!(syllables(&table, 0), vec!["a", "", "b", "c", ""]);
    }

    #[test]
    fn move_right_then_move_left_is_identity_on_data() {
        let mut table = row_of(&["a", "b", "c"]);
        table.set_revised(0, 1, true);

        table.cell_move_right(0, 1);
        table.cell_move_left(0, 2);

        assert_eq!(syllables(&table, 0), vec!["a", "b", "c", ""]);
        assert!(table.revised(0, 1));
    }

    #[test]
    fn merge_left_concatenates_display_text_only() {
        let mut table = row_of(&["a", "b", "c"]);
        table.set_revised(0, 0, true);
        table.set_candidates(0, 1, vec!["bee".into()]);

        table.cell_merge_left(0, 1);

        assert_eq!(syllables(&table, 0), vec!["ab", "c", ""]);
        // left cell keeps its own roles, merged cell's roles are gone
        assert!(table.revised(0, 0));
        assert!(table.candidates(0, 0).is_empty());
        assert!(table.view.table_dirty);
    }
}
