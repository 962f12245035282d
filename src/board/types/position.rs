//! Board coordinates and step vectors.

use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// A coordinate on the board, represented as (row, col).
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1. Arithmetic with a
/// [`Direction`] may step off the board; such positions are representable but
/// not [valid](Position::is_valid), which is what edge probing relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// True if both coordinates lie in 0..=7
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Rank as printed on a board (1-8, counted from White's side)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        8 - self.row
    }

    /// File letter ('a'-'h')
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' as i8 + self.col) as u8 as char
    }

    /// Row-major index (0-63). Only meaningful for valid positions.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        debug_assert!(self.is_valid());
        (self.row as usize) * 8 + self.col as usize
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Position::new((idx / 8) as i8, (idx % 8) as i8)
    }

    /// All 64 valid positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", self.file(), self.rank())
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl TryFrom<(i8, i8)> for Position {
    type Error = PositionError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        let position = Position::new(row, col);
        if position.is_valid() {
            Ok(position)
        } else {
            Err(PositionError::OutOfBounds { row, col })
        }
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let col = match bytes[0] {
            c @ b'a'..=b'h' => (c - b'a') as i8,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => 8 - (r - b'0') as i8,
            _ => return Err(invalid()),
        };
        Ok(Position::new(row, col))
    }
}

/// A step vector (row delta, column delta).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    #[must_use]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Direction { d_row, d_col }
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    #[inline]
    fn add(self, dir: Direction) -> Position {
        Position::new(self.row + dir.d_row, self.col + dir.d_col)
    }
}

impl Mul<i8> for Direction {
    type Output = Direction;

    #[inline]
    fn mul(self, distance: i8) -> Direction {
        Direction::new(self.d_row * distance, self.d_col * distance)
    }
}
