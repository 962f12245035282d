//! Move variants.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind, PromotionChoice};
use super::position::Position;
use super::square::Square;

/// A move. The moving piece is stored as it stood before the move.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// A plain move or capture
    Basic {
        piece: Piece,
        dest: Position,
        captured: bool,
    },
    /// A pawn reaching the last row
    Promotion {
        pawn: Piece,
        dest: Position,
        captured: bool,
        promoted: Piece,
    },
    /// King and rook moving together
    Castling {
        king: Piece,
        king_dest: Position,
        rook: Piece,
        rook_dest: Position,
        queen_side: bool,
    },
    /// A pawn capturing a pawn that just double-stepped past it
    EnPassant {
        pawn: Piece,
        dest: Position,
        captured_pawn: Position,
    },
}

/// Set of generated moves. Iteration order is unspecified.
pub type MoveSet = std::collections::HashSet<Move>;

impl Move {
    pub(crate) fn basic(piece: &Piece, dest: Position, captured: bool) -> Self {
        Move::Basic {
            piece: piece.clone(),
            dest,
            captured,
        }
    }

    pub(crate) fn promotion(
        pawn: &Piece,
        dest: Position,
        captured: bool,
        choice: PromotionChoice,
    ) -> Self {
        Move::Promotion {
            pawn: pawn.clone(),
            dest,
            captured,
            promoted: pawn.promoted_to(choice, dest),
        }
    }

    /// The piece that initiates the move (the king when castling)
    #[must_use]
    pub fn piece(&self) -> &Piece {
        match self {
            Move::Basic { piece, .. } => piece,
            Move::Promotion { pawn, .. } | Move::EnPassant { pawn, .. } => pawn,
            Move::Castling { king, .. } => king,
        }
    }

    /// Where the moving piece starts
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Position {
        self.piece().position()
    }

    /// Where the moving piece lands
    #[must_use]
    pub fn dest(&self) -> Position {
        match self {
            Move::Basic { dest, .. }
            | Move::Promotion { dest, .. }
            | Move::EnPassant { dest, .. } => *dest,
            Move::Castling { king_dest, .. } => *king_dest,
        }
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        match self {
            Move::Basic { captured, .. } | Move::Promotion { captured, .. } => *captured,
            Move::Castling { .. } => false,
            Move::EnPassant { .. } => true,
        }
    }

    /// The chosen promotion piece, for promotion moves
    #[must_use]
    pub fn promotion_choice(&self) -> Option<PromotionChoice> {
        match self {
            Move::Promotion { promoted, .. } => PromotionChoice::try_from(promoted.kind()).ok(),
            _ => None,
        }
    }

    /// The same promotion with another piece chosen; `None` for other moves
    #[must_use]
    pub fn with_promotion(&self, choice: PromotionChoice) -> Option<Move> {
        match self {
            Move::Promotion {
                pawn,
                dest,
                captured,
                ..
            } => Some(Move::promotion(pawn, *dest, *captured, choice)),
            _ => None,
        }
    }

    /// Squares whose occupancy changes when this move is played, with their
    /// new contents. Playing a move rewrites exactly these squares.
    #[must_use]
    pub fn impacted_squares(&self) -> Vec<Square> {
        match self {
            Move::Basic { piece, dest, .. } => vec![
                Square::empty(piece.position()),
                Square::occupied(piece.moved_to(*dest)),
            ],
            Move::Promotion { pawn, promoted, .. } => vec![
                Square::empty(pawn.position()),
                Square::occupied(promoted.clone()),
            ],
            Move::Castling {
                king,
                king_dest,
                rook,
                rook_dest,
                ..
            } => vec![
                Square::empty(king.position()),
                Square::empty(rook.position()),
                Square::occupied(king.moved_to(*king_dest)),
                Square::occupied(rook.moved_to(*rook_dest)),
            ],
            Move::EnPassant {
                pawn,
                dest,
                captured_pawn,
            } => vec![
                Square::empty(pawn.position()),
                Square::occupied(pawn.moved_to(*dest)),
                Square::empty(*captured_pawn),
            ],
        }
    }

    /// True for a pawn's two-square advance
    #[must_use]
    pub fn is_double_step(&self) -> bool {
        match self {
            Move::Basic { piece, dest, .. } => {
                piece.kind() == PieceKind::Pawn && (dest.row() - piece.position().row()).abs() == 2
            }
            _ => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation(false))
    }
}
