//! Phonetic lyric table WASM API
//!
//! This module provides the JavaScript-facing API for the lyric table
//! editor: import/export of lyric content, the cell and line edit
//! operations, fermata collapse/expand, and undo/redo over the
//! WASM-owned table.
//!
//! # Module Structure
//!
//! - `helpers`: shared serialization, error handling and logging
//! - `editor`: the exported editor functions and the table singleton

pub mod editor;
pub mod helpers;

// Re-export the public API surface
pub use editor::{DirtyLine, EditResult, ExportedSyllable};
