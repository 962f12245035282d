//! Board cells.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::player::Player;
use super::position::Position;

/// A cell of the board and its occupant, if any.
///
/// The constructors keep the occupant's position equal to the square's.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    position: Position,
    piece: Option<Piece>,
}

impl Square {
    /// An empty square. Panics if the position is off the board.
    #[must_use]
    pub fn empty(position: Position) -> Self {
        assert!(position.is_valid(), "square at invalid position {position}");
        Square {
            position,
            piece: None,
        }
    }

    /// The square the piece is standing on
    #[must_use]
    pub fn occupied(piece: Piece) -> Self {
        let position = piece.position();
        assert!(position.is_valid(), "square at invalid position {position}");
        Square {
            position,
            piece: Some(piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// True if a piece of `player` stands here
    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, player: Player) -> bool {
        self.piece.as_ref().is_some_and(|p| p.player() == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_occupied_square_takes_piece_position() {
        let pos = Position::new(3, 3);
        let square = Square::occupied(Piece::new(PieceKind::Queen, Player::Black, pos));
        assert_eq!(square.position(), pos);
        assert!(square.is_occupied_by(Player::Black));
        assert!(!square.is_occupied_by(Player::White));
    }

    #[test]
    #[should_panic(expected = "invalid position")]
    fn test_off_board_square_panics() {
        let _ = Square::empty(Position::new(8, 0));
    }
}
