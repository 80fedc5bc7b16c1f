//! The fixed set of logical keys a gesture can emit.
//!
//! # Why only five keys?
//!
//! Gesture control targets games and slideshows, which need a jump/confirm
//! key and four directions.  The set is closed on purpose: there is no
//! user-defined mapping.
//!
//! A symbol is chosen by the **first character** of the caller's string, so
//! `"s"` and `"space"` both mean [`KeySymbol::Space`], `"l"` and `"left"`
//! both mean [`KeySymbol::Left`], and so on.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeySymbol {
    Space,
    Left,
    Right,
    Up,
    Down,
}

impl KeySymbol {
    pub const ALL: [KeySymbol; 5] = [
        KeySymbol::Space,
        KeySymbol::Left,
        KeySymbol::Right,
        KeySymbol::Up,
        KeySymbol::Down,
    ];

    /// Maps the single-character form (`'s'`, `'l'`, `'r'`, `'u'`, `'d'`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Space),
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            'u' => Some(Self::Up),
            'd' => Some(Self::Down),
            _ => None,
        }
    }

    /// Parses caller input by its first character.
    ///
    /// Returns `None` for an empty string or an unknown leading character.
    pub fn parse(input: &str) -> Option<Self> {
        input.chars().next().and_then(Self::from_char)
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Space => 's',
            Self::Left => 'l',
            Self::Right => 'r',
            Self::Up => 'u',
            Self::Down => 'd',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for KeySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
