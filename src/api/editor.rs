//! JavaScript-facing editor API
//!
//! The WASM module owns the table (canonical source of truth) together
//! with its undo history; JavaScript drives it through the functions
//! below and re-renders from the returned dirty lines. Every call runs
//! to completion on the calling thread; the mutexes only guard the
//! singleton against accidental re-entry, they are not a concurrency
//! feature.

use std::sync::Mutex;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, log_info, serialize};
use crate::models::{Cell, PhonicTable};
use crate::parse::parse_lyric;
use crate::undo::UndoStack;

// WASM-owned table storage
lazy_static! {
    static ref TABLE: Mutex<PhonicTable> = Mutex::new(PhonicTable::new());
    static ref HISTORY: Mutex<UndoStack> = Mutex::new(UndoStack::new());
}

/// One line whose content changed during an edit
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DirtyLine {
    pub row: usize,
    pub cells: Vec<Cell>,
}

/// Result of an edit operation: what to re-render, and the new shape
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EditResult {
    pub dirty_lines: Vec<DirtyLine>,
    pub table_dirty: bool,
    pub row_count: usize,
    pub column_count: usize,
}

/// One occupied cell as seen by downstream consumers
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportedSyllable {
    pub syllable: String,
    pub candidates: Vec<String>,
    pub revised: bool,
}

fn lock_table() -> Result<std::sync::MutexGuard<'static, PhonicTable>, JsValue> {
    TABLE.lock().map_err(|_| JsValue::from_str("table lock poisoned"))
}

fn lock_history() -> Result<std::sync::MutexGuard<'static, UndoStack>, JsValue> {
    HISTORY.lock().map_err(|_| JsValue::from_str("history lock poisoned"))
}

/// Drain the table's pending notification into an [`EditResult`]
fn edit_result(table: &mut PhonicTable) -> EditResult {
    let view = table.view.take();
    let rows: Vec<usize> = if view.table_dirty {
        (0..table.row_count()).collect()
    } else {
        view.dirty_rows
            .into_iter()
            .filter(|&row| row < table.row_count())
            .collect()
    };

    EditResult {
        dirty_lines: rows
            .into_iter()
            .map(|row| DirtyLine {
                row,
                cells: table.rows[row].clone(),
            })
            .collect(),
        table_dirty: view.table_dirty,
        row_count: table.row_count(),
        column_count: table.column_count,
    }
}

/// Run one mutating operation against the singleton: record it in the
/// history, then report the dirty lines back to JavaScript
fn run_edit<F>(description: &str, op: F) -> Result<JsValue, JsValue>
where
    F: FnOnce(&mut PhonicTable),
{
    log_info(&format!("{} requested", description));

    let mut table = lock_table()?;
    let mut history = lock_history()?;

    history.apply(&mut table, description, op);
    debug_assert!(table.validate().is_ok());

    serialize(&edit_result(&mut table), "edit result serialization error")
}

/// Tokenize lyric text and install it as the current table
#[wasm_bindgen(js_name = importLyrics)]
pub fn import_lyrics(text: &str) -> Result<JsValue, JsValue> {
    let table = parse_lyric(text);
    log_info(&format!(
        "importLyrics: {} rows, {} columns",
        table.row_count(),
        table.column_count
    ));

    let mut current = lock_table()?;
    let mut history = lock_history()?;
    *current = table;
    history.clear();

    serialize(&*current, "table serialization error")
}

/// Replace the current table with one provided by JavaScript
///
/// Used when the embedding editor restores a session of its own; the
/// undo history starts over.
#[wasm_bindgen(js_name = setTable)]
pub fn set_table(table_js: JsValue) -> Result<(), JsValue> {
    let table: PhonicTable = deserialize(table_js, "table deserialization error")?;

    let mut current = lock_table()?;
    let mut history = lock_history()?;
    *current = table;
    history.clear();
    Ok(())
}

/// The current table, serialized for JavaScript
#[wasm_bindgen(js_name = getTable)]
pub fn get_table() -> Result<JsValue, JsValue> {
    let table = lock_table()?;
    serialize(&*table, "table serialization error")
}

/// The current table as a JSON string
#[wasm_bindgen(js_name = tableToJson)]
pub fn table_to_json() -> Result<String, JsValue> {
    let table = lock_table()?;
    serde_json::to_string(&*table).map_err(|e| JsValue::from_str(&format!("JSON error: {}", e)))
}

/// Read back the occupied cells, one array per line
///
/// Cells with an empty syllable and no fermata addition are absent from
/// the output.
#[wasm_bindgen(js_name = exportLyrics)]
pub fn export_lyrics() -> Result<js_sys::Array, JsValue> {
    let table = lock_table()?;

    let lines = js_sys::Array::new();
    for row in 0..table.row_count() {
        let exported: Vec<ExportedSyllable> = table.rows[row]
            .iter()
            .filter(|cell| !cell.is_empty() || !cell.fermata_addition.is_empty())
            .map(|cell| ExportedSyllable {
                syllable: cell.syllable.clone(),
                candidates: cell.candidates.clone(),
                revised: cell.revised,
            })
            .collect();
        lines.push(&serialize(&exported, "syllable serialization error")?);
    }
    Ok(lines)
}

// ============================================================================
// Edit operations
// ============================================================================

#[wasm_bindgen(js_name = cellClear)]
pub fn cell_clear(row: usize, col: usize) -> Result<JsValue, JsValue> {
    run_edit("clear cell", |t| t.cell_clear(row, col))
}

#[wasm_bindgen(js_name = cellMergeLeft)]
pub fn cell_merge_left(row: usize, col: usize) -> Result<JsValue, JsValue> {
    run_edit("merge left", |t| t.cell_merge_left(row, col))
}

#[wasm_bindgen(js_name = cellMoveLeft)]
pub fn cell_move_left(row: usize, col: usize) -> Result<JsValue, JsValue> {
    run_edit("move left", |t| t.cell_move_left(row, col))
}

#[wasm_bindgen(js_name = cellMoveRight)]
pub fn cell_move_right(row: usize, col: usize) -> Result<JsValue, JsValue> {
    run_edit("move right", |t| t.cell_move_right(row, col))
}

#[wasm_bindgen(js_name = cellNewLine)]
pub fn cell_new_line(row: usize, col: usize) -> Result<JsValue, JsValue> {
    run_edit("split line", |t| t.cell_new_line(row, col))
}

#[wasm_bindgen(js_name = cellMergeUp)]
pub fn cell_merge_up(row: usize) -> Result<JsValue, JsValue> {
    run_edit("merge line up", |t| t.cell_merge_up(row))
}

#[wasm_bindgen(js_name = addPrevLine)]
pub fn add_prev_line(row: usize) -> Result<JsValue, JsValue> {
    run_edit("add line above", |t| t.add_prev_line(row))
}

#[wasm_bindgen(js_name = addNextLine)]
pub fn add_next_line(row: usize) -> Result<JsValue, JsValue> {
    run_edit("add line below", |t| t.add_next_line(row))
}

#[wasm_bindgen(js_name = removeLine)]
pub fn remove_line(row: usize) -> Result<JsValue, JsValue> {
    run_edit("remove line", |t| t.remove_line(row))
}

#[wasm_bindgen(js_name = collapseFermata)]
pub fn collapse_fermata() -> Result<JsValue, JsValue> {
    run_edit("collapse fermata", |t| t.collapse_fermata())
}

#[wasm_bindgen(js_name = expandFermata)]
pub fn expand_fermata() -> Result<JsValue, JsValue> {
    run_edit("expand fermata", |t| t.expand_fermata())
}

// ============================================================================
// History
// ============================================================================

#[wasm_bindgen(js_name = undoEdit)]
pub fn undo_edit() -> Result<JsValue, JsValue> {
    let mut table = lock_table()?;
    let mut history = lock_history()?;

    history
        .undo(&mut table)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serialize(&edit_result(&mut table), "edit result serialization error")
}

#[wasm_bindgen(js_name = redoEdit)]
pub fn redo_edit() -> Result<JsValue, JsValue> {
    let mut table = lock_table()?;
    let mut history = lock_history()?;

    history
        .redo(&mut table)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serialize(&edit_result(&mut table), "edit result serialization error")
}
