//! Phonetic Lyric Table WASM Module
//!
//! Core functionality for Cell-based lyric table editing in a
//! singing-voice-synthesis project editor: a grid of lyric syllables per
//! line with merge/split/move operations and fermata collapse/expand,
//! exposed to JavaScript through the `api` module.

pub mod api;
pub mod models;
pub mod parse;
pub mod structure;
pub mod undo;

// Re-export commonly used types
pub use crate::models::core::*;
pub use crate::models::elements::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Phonetic lyric table WASM module initialized");
}
