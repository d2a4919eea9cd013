//! Edit operations over the phonetic lyric table
//!
//! The modules here extend [`crate::models::PhonicTable`] with the three
//! operation layers, leaves first:
//!
//! - `cells`: single-cell clear/move/merge primitives
//! - `lines`: line split/merge/insert/remove, composed from cell moves
//! - `fermata`: bulk collapse/expand of sustained-note runs

pub mod cells;
pub mod fermata;
pub mod lines;
