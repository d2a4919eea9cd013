//! Lyric text tokenizer
//!
//! Splits raw lyric text into the cells of a phonetic table: one row per
//! input line, one cell per syllable. A CJK ideograph or kana character
//! is a syllable on its own; consecutive Latin letters form one cell, as
//! do consecutive digits; a fermata symbol becomes a `Fermata`-tagged
//! cell carrying the symbol itself. Everything else (punctuation) is
//! stripped, and whitespace only separates tokens.
//!
//! Candidate readings stay empty at this stage; grapheme-to-phoneme
//! conversion is a downstream collaborator's job.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::models::{Cell, LyricType, PhonicTable};

/// Characters read as a sustained-note (fermata) marker
static FERMATA_SYMBOLS: Lazy<HashSet<char>> =
    Lazy::new(|| HashSet::from(['-', '－', '—']));

/// Characters that may continue a Latin-letter syllable cell
static LETTER_EXTRAS: Lazy<HashSet<char>> = Lazy::new(|| HashSet::from(['\'', '’']));

fn is_cjk_syllable(c: char) -> bool {
    matches!(u32::from(c),
        0x3400..=0x4DBF   // CJK extension A
        | 0x4E00..=0x9FFF // CJK unified ideographs
        | 0xF900..=0xFAFF // CJK compatibility ideographs
        | 0x3040..=0x309F // hiragana
        | 0x30A0..=0x30FF // katakana
    )
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || LETTER_EXTRAS.contains(&c)
}

/// Tokenize one line of lyric text into cells
pub fn parse_line(line: &str) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if FERMATA_SYMBOLS.contains(&c) {
            cells.push(Cell::new(c.to_string(), LyricType::Fermata));
        } else if is_cjk_syllable(c) {
            cells.push(Cell::new(c.to_string(), LyricType::Normal));
        } else if is_letter(c) {
            let mut word = String::from(c);
            while let Some(&next) = chars.peek() {
                if !is_letter(next) {
                    break;
                }
                word.push(next);
                chars.next();
            }
            cells.push(Cell::new(word, LyricType::Letter));
        } else if c.is_ascii_digit() {
            let mut number = String::from(c);
            while let Some(&next) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                number.push(next);
                chars.next();
            }
            cells.push(Cell::new(number, LyricType::Digit));
        }
        // anything else is punctuation, dropped
    }

    cells
}

/// Tokenize multi-line lyric text into a table, one row per line
pub fn parse_lyric(text: &str) -> PhonicTable {
    let rows: Vec<Vec<Cell>> = text.lines().map(parse_line).collect();
    log::debug!("parsed lyric text into {} rows", rows.len());
    PhonicTable::from_rows(rows)
}
