//! Board coordinates in `<column><row>` text form, e.g. `H3`.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::common::{InputError, StepError};
use crate::config::{column_index, column_letter, BOARD_SIZE, MAX_ROW, MIN_ROW};

/// A cell on the board. Always within bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    col: u8,
    row: u8,
}

impl Coordinate {
    /// Build from a zero-based column index and a one-based row number.
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if col < BOARD_SIZE && (MIN_ROW..=MAX_ROW).contains(&row) {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// Zero-based column index (`A` = 0).
    pub fn col(&self) -> u8 {
        self.col
    }

    /// One-based row number.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column letter, upper-case.
    pub fn letter(&self) -> char {
        // col < BOARD_SIZE is an invariant of construction
        column_letter(self.col).unwrap_or('?')
    }

    /// Move by `(dc, dr)` cells. `Err` carries the off-board candidate as
    /// `(column index, row)`.
    pub fn offset(&self, dc: i16, dr: i16) -> Result<Self, (i16, i16)> {
        let col = self.col as i16 + dc;
        let row = self.row as i16 + dr;
        u8::try_from(col)
            .ok()
            .zip(u8::try_from(row).ok())
            .and_then(|(c, r)| Self::new(c, r))
            .ok_or((col, row))
    }

    /// Parse text without checking board bounds.
    ///
    /// Returns the upper-cased column letter and the row number. Accepts
    /// surrounding whitespace and a lower-case letter; anything other than one
    /// ASCII letter followed by decimal digits is rejected. Rows too large
    /// for `u32` saturate, so they still fail later as out of bounds.
    pub fn parse_label(text: &str) -> Result<(char, u32), InputError> {
        let trimmed = text.trim();
        let invalid = || InputError::InvalidCoordinate(trimmed.to_string());
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if !letter.is_ascii_alphabetic() {
            return Err(invalid());
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row = digits.parse::<u32>().unwrap_or(u32::MAX);
        Ok((letter.to_ascii_uppercase(), row))
    }

    /// Place an already-parsed label on the board. An off-board label fails
    /// with `OutOfBounds` at step 0.
    pub fn from_label(letter: char, row: u32) -> Result<Self, StepError> {
        let col_idx = (letter.to_ascii_uppercase() as i16) - ('A' as i16);
        let row_i = i16::try_from(row).unwrap_or(i16::MAX);
        column_index(letter)
            .zip(u8::try_from(row).ok())
            .and_then(|(c, r)| Self::new(c, r))
            .ok_or(StepError::OutOfBounds {
                step: 0,
                column: col_idx,
                row: row_i,
            })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.row)
    }
}

impl FromStr for Coordinate {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (letter, row) = Self::parse_label(s)?;
        Self::from_label(letter, row)
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for Coordinate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Coordinate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
