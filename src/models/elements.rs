//! Element types and enumerations for the phonetic lyric table
//!
//! This module defines the core enums used throughout the Cell-based
//! lyric table: the phonetic class tag carried by every cell and the
//! role names used to address subsets of a cell's attributes.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Phonetic class of a lyric cell, assigned at import time
#[repr(u8)]
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LyricType {
    /// A regular syllable (one CJK ideograph)
    #[default]
    Normal = 0,

    /// A sustained-note marker with no new syllable; collapsible into the
    /// preceding syllable cell's fermata addition
    Fermata = 1,

    /// A run of Latin letters treated as one syllable cell
    Letter = 2,

    /// A run of ASCII digits treated as one syllable cell
    Digit = 3,
}

/// One of the named per-cell attributes
///
/// Operations that move or clear a restricted subset of a cell take an
/// explicit `&[Role]`; whole-bundle operations pass [`Role::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Syllable,
    Candidates,
    Revised,
    LyricType,
    FermataAddition,
}

impl Role {
    /// The full role bundle, in declaration order
    pub const ALL: &'static [Role] = &[
        Role::Syllable,
        Role::Candidates,
        Role::Revised,
        Role::LyricType,
        Role::FermataAddition,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lyric_type_serializes_as_integer_tag() {
        let json = serde_json::to_string(&LyricType::Fermata).unwrap();
        assert_eq!(json, "1");

        let parsed: LyricType = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, LyricType::Letter);
    }

    #[test]
    fn all_roles_covers_every_attribute() {
        assert_eq!(Role::ALL.len(), 5);
        assert_eq!(Role::ALL[0], Role::Syllable);
        assert_eq!(Role::ALL[4], Role::FermataAddition);
    }
}
