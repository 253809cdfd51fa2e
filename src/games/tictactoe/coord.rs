//! Board coordinates: column letter plus row number.

use super::error::BoardError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square address, zero-based.
///
/// Displays as column letter and 1-based row (`C3` is column 2, row 2).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Coord {
    /// Column, 0 is `A`.
    pub col: usize,
    /// Row, 0 is `1`.
    pub row: usize,
}

impl Coord {
    /// Flat row-major index on a board of the given width.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Coord::to_index`].
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            col: index % size,
            row: index / size,
        }
    }

    /// True if the coordinate lies on a board of the given width.
    pub fn within(self, size: usize) -> bool {
        self.col < size && self.row < size
    }

    /// Parses untrusted input against a board of the given width.
    ///
    /// Accepts letter + row (`"c3"`, `"B12"`) or a 1-based square number
    /// counted left to right, top to bottom (`"5"` is the centre of 3×3).
    #[instrument]
    pub fn parse(input: &str, size: usize) -> Result<Self, BoardError> {
        let trimmed = input.trim();
        let invalid = || BoardError::InvalidCoordinate(trimmed.to_string());

        if is_digits(trimmed) {
            let number: usize = trimmed.parse().map_err(|_| invalid())?;
            if number == 0 || number > size * size {
                return Err(invalid());
            }
            return Ok(Self::from_index(number - 1, size));
        }

        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }
        let digits = chars.as_str();
        if !is_digits(digits) {
            return Err(invalid());
        }
        let row: usize = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        let coord = Self {
            col: (letter as u8 - b'A') as usize,
            row: row - 1,
        };
        if coord.within(size) {
            Ok(coord)
        } else {
            Err(invalid())
        }
    }
}

/// Plain ASCII digits only; `usize::from_str` would also take a leading `+`.
fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}
