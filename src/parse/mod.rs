//! Parsing module for the phonetic lyric table
//!
//! Converts raw lyric text into Cell-based table content.

pub mod lyric;

// Re-export commonly used functions
pub use lyric::{parse_line, parse_lyric};
