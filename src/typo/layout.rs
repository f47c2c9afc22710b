//! Keyboard geometry tables.
//!
//! Each layout is two shift banks (unshifted, shifted) of four ordered
//! rows. A character's coordinate is its `(row, column)` position within
//! whichever bank contains it, with the unshifted bank searched first.
//! Empty `""` cells reserve a column slot without holding a character, so
//! coordinates stay aligned with the physical key grid.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Four rows of a single shift bank.
type Bank = [&'static [&'static str]; 4];

static QWERTY_UNSHIFTED: Bank = [
    &["`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "="],
    &["", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[", "]", "\\"],
    &["", "a", "s", "d", "f", "g", "h", "j", "k", "l", ";", "'"],
    &["", "z", "x", "c", "v", "b", "n", "m", ",", ".", "/"],
];

static QWERTY_SHIFTED: Bank = [
    &["~", "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "_", "+"],
    &["", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "{", "}", "|"],
    &["", "A", "S", "D", "F", "G", "H", "J", "K", "L", ":", "\""],
    &["", "Z", "X", "C", "V", "B", "N", "M", "<", ">", "?"],
];

static DVORAK_UNSHIFTED: Bank = [
    &["`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "[", "]"],
    &["", "'", ",", ".", "p", "y", "f", "g", "c", "r", "l", "/", "=", "\\"],
    &["", "a", "o", "e", "u", "i", "d", "h", "t", "n", "s", "-"],
    &["", ";", "q", "j", "k", "x", "b", "m", "w", "v", "z"],
];

static DVORAK_SHIFTED: Bank = [
    &["~", "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "{", "}"],
    &["", "\"", "<", ">", "P", "Y", "F", "G", "C", "R", "L", "?", "+", "|"],
    &["", "A", "O", "E", "U", "I", "D", "H", "T", "N", "S", "_"],
    &["", ":", "Q", "J", "K", "X", "B", "M", "W", "V", "Z"],
];

static AZERTY_UNSHIFTED: Bank = [
    &["²", "&", "é", "\"", "'", "(", "-", "è", "_", "ç", "à", ")", "="],
    &["", "a", "z", "e", "r", "t", "y", "u", "i", "o", "p", "", "$"],
    &["", "q", "s", "d", "f", "g", "h", "j", "k", "l", "m", "ù", "*"],
    &["<", "w", "x", "c", "v", "b", "n", ",", ";", ":", "!"],
];

static AZERTY_SHIFTED: Bank = [
    &["~", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "°", "+"],
    &["", "A", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "", "£"],
    &["", "Q", "S", "D", "F", "G", "H", "J", "K", "L", "M", "Ù", "μ"],
    &[">", "W", "X", "C", "V", "B", "N", "?", ".", "/", "§"],
];

static QWERTZ_UNSHIFTED: Bank = [
    &["", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "ß", ""],
    &["", "q", "w", "e", "r", "t", "z", "u", "i", "o", "p", " ü", "+", "\\"],
    &["", "a", "s", "d", "f", "g", "h", "j", "k", "l", "ö", "ä", "#"],
    &["<", "y", "x", "c", "v", "b", "n", "m", ",", ".", "-"],
];

static QWERTZ_SHIFTED: Bank = [
    &["°", "!", "\"", "§", "$", "%", "&", "/", "(", ")", "=", "?", ""],
    &["", "Q", "W", "E", "R", "T", "Z", "U", "I", "O", "P", "Ü", "*", ""],
    &["", "A", "S", "D", "F", "G", "H", "J", "K", "L", "Ö", "Ä", "'"],
    &[">", "Y", "X", "C", "V", "B", "N", "M", ";", ":", "_"],
];

/// Resolved position of a character on a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyPosition {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) shifted: bool,
}

/// Keyboard layout used for typo-distance substitution pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Layout {
    /// The US QWERTY layout.
    #[default]
    Qwerty,
    /// The Dvorak simplified layout.
    Dvorak,
    /// The French AZERTY layout.
    Azerty,
    /// The German QWERTZ layout.
    Qwertz,
}

/// True when `cell` holds exactly the character `ch`.
///
/// Placeholder cells (`""`) and multi-character cells never match.
fn cell_is(cell: &str, ch: char) -> bool {
    let mut chars = cell.chars();
    chars.next() == Some(ch) && chars.next().is_none()
}

impl Layout {
    /// Get the display name for this layout.
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Qwerty => "QWERTY",
            Layout::Dvorak => "Dvorak",
            Layout::Azerty => "AZERTY",
            Layout::Qwertz => "QWERTZ",
        }
    }

    fn banks(&self) -> [&'static Bank; 2] {
        match self {
            Layout::Qwerty => [&QWERTY_UNSHIFTED, &QWERTY_SHIFTED],
            Layout::Dvorak => [&DVORAK_UNSHIFTED, &DVORAK_SHIFTED],
            Layout::Azerty => [&AZERTY_UNSHIFTED, &AZERTY_SHIFTED],
            Layout::Qwertz => [&QWERTZ_UNSHIFTED, &QWERTZ_SHIFTED],
        }
    }

    /// Locate `ch` on this layout, searching the unshifted bank first.
    pub(crate) fn locate(&self, ch: char) -> Result<KeyPosition> {
        for (shifted, bank) in [false, true].into_iter().zip(self.banks()) {
            for (row, cells) in bank.iter().enumerate() {
                if let Some(col) = cells.iter().position(|cell| cell_is(cell, ch)) {
                    return Ok(KeyPosition { row, col, shifted });
                }
            }
        }
        Err(Error::UnsupportedCharacter { ch, layout: *self })
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "qwerty" => Ok(Layout::Qwerty),
            "dvorak" => Ok(Layout::Dvorak),
            "azerty" => Ok(Layout::Azerty),
            "qwertz" => Ok(Layout::Qwertz),
            _ => Err(Error::UnknownLayout(s.to_string())),
        }
    }
}
