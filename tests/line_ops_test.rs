// Line-level operations and shrink bookkeeping

use phonic_wasm::models::{Cell, LyricType, PhonicTable};

fn row(syllables: &[&str]) -> Vec<Cell> {
    syllables
        .iter()
        .map(|s| Cell::new(*s, LyricType::Normal))
        .collect()
}

fn syllables(table: &PhonicTable, row: usize) -> Vec<String> {
    (0..table.column_count)
        .map(|col| table.syllable(row, col).to_string())
        .collect()
}

/// Brute-force rightmost occupied column over the whole table
fn brute_force_max_col(table: &PhonicTable) -> usize {
    let mut max = 0;
    for r in 0..table.row_count() {
        for c in 0..table.column_count {
            if !table.syllable(r, c).is_empty() {
                max = max.max(c);
            }
        }
    }
    max
}

#[test]
fn new_line_splits_and_merge_up_rejoins() {
    let mut table = PhonicTable::from_rows(vec![row(&["a", "b", "c", "d"])]);

    table.cell_new_line(0, 2);
    assert_eq!(syllables(&table, 0), vec!["a", "b"]);
    assert_eq!(syllables(&table, 1), vec!["c", "d"]);

    table.cell_merge_up(1);
    assert_eq!(table.row_count(), 1);
    assert_eq!(syllables(&table, 0), vec!["a", "b", "c", "d"]);
}

#[test]
fn merge_up_reserves_capacity_past_the_joined_content() {
    let mut table = PhonicTable::from_rows(vec![row(&["a", "b"]), row(&["c", "d"])]);

    table.cell_merge_up(1);

    assert_eq!(table.column_count, 4);
    assert_eq!(table.model_max_col, 4, "growth formula keeps one spare column");
    assert_eq!(syllables(&table, 0), vec!["a", "b", "c", "d"]);

    // shrink drops the reserve once asked
    table.shrink();
    assert_eq!(table.column_count, 4);
    assert_eq!(table.model_max_col, 3);
}

#[test]
fn shrink_matches_a_brute_force_scan_after_mixed_edits() {
    let mut table = PhonicTable::from_rows(vec![row(&["明", "天", "你", "好"]), row(&["一", "二", "三"])]);

    table.cell_move_right(0, 1);
    table.cell_move_right(0, 1);
    table.cell_clear(1, 2);
    table.shrink();

    let expected = brute_force_max_col(&table);
    assert_eq!(table.model_max_col, expected);
    assert_eq!(table.column_count, expected + 1);
    assert!(table.validate().is_ok());
}

#[test]
fn removing_the_longest_line_tightens_the_table() {
    let mut table = PhonicTable::from_rows(vec![row(&["a"]), row(&["b", "c", "d", "e"])]);
    assert_eq!(table.column_count, 4);

    table.remove_line(1);

    assert_eq!(table.column_count, 1);
    assert_eq!(table.model_max_col, 0);
}

#[test]
fn inserted_lines_match_the_current_width() {
    let mut table = PhonicTable::from_rows(vec![row(&["a", "b", "c"])]);

    table.add_next_line(0);
    table.add_prev_line(0);

    assert_eq!(table.row_count(), 3);
    assert!(table.validate().is_ok(), "blank rows must share the table width");
    assert_eq!(table.line_length(0), 0);
    assert_eq!(table.line_length(2), 0);
}
