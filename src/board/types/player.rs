//! The two sides.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A side in the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Both players in index order (White=0, Black=1)
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Returns the other side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row holding this side's pieces at the start (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> i8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    /// Row holding this side's pawns at the start
    #[inline]
    #[must_use]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Player::White => 6,
            Player::Black => 1,
        }
    }

    /// Row delta of a pawn step (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Row on which this side's pawns promote
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> i8 {
        self.opponent().back_row()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}
