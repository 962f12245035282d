//! Piece kinds and immutable piece values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::position::{Direction, Position};
use crate::board::error::PromotionError;

const ORTHOGONAL: [Direction; 4] = [
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(-1, 0),
];

const DIAGONAL: [Direction; 4] = [
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(-1, 0),
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

const KNIGHT_JUMPS: [Direction; 8] = [
    Direction::new(1, 2),
    Direction::new(1, -2),
    Direction::new(-1, 2),
    Direction::new(-1, -2),
    Direction::new(2, 1),
    Direction::new(2, -1),
    Direction::new(-2, 1),
    Direction::new(-2, -1),
];

const WHITE_PAWN: [Direction; 1] = [Direction::new(-1, 0)];
const BLACK_PAWN: [Direction; 1] = [Direction::new(1, 0)];

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// How far the piece may travel along one of its directions.
    ///
    /// Pawns report 1 here; their double step is a separate rule.
    #[inline]
    #[must_use]
    pub const fn step_limit(self) -> i8 {
        match self {
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => 1,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => 7,
        }
    }

    /// Returns true for bishops, rooks and queens
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Uppercase letter used in algebraic notation ('P' for pawns)
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// The pieces a pawn may promote to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PromotionChoice {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionChoice {
    /// Promotion choices in order of typical preference (queen first)
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Knight => PieceKind::Knight,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Queen => PieceKind::Queen,
        }
    }
}

impl TryFrom<PieceKind> for PromotionChoice {
    type Error = PromotionError;

    fn try_from(kind: PieceKind) -> Result<Self, Self::Error> {
        match kind {
            PieceKind::Knight => Ok(PromotionChoice::Knight),
            PieceKind::Bishop => Ok(PromotionChoice::Bishop),
            PieceKind::Rook => Ok(PromotionChoice::Rook),
            PieceKind::Queen => Ok(PromotionChoice::Queen),
            PieceKind::Pawn | PieceKind::King => Err(PromotionError::UnsupportedPiece { kind }),
        }
    }
}

/// A piece standing on the board.
///
/// Pieces are values: moving one yields a new piece whose history has the
/// destination appended. An empty history means the piece never moved, which
/// is what castling and the pawn double step look at.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) player: Player,
    pub(crate) position: Position,
    pub(crate) history: Vec<Position>,
}

impl Piece {
    /// A piece that has not moved yet
    #[must_use]
    pub fn new(kind: PieceKind, player: Player, position: Position) -> Self {
        Piece {
            kind,
            player,
            position,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Positions occupied after each of this piece's moves, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn has_moved(&self) -> bool {
        !self.history.is_empty()
    }

    /// Direction set of this piece. Pawns only list their forward step.
    #[must_use]
    pub fn directions(&self) -> &'static [Direction] {
        match self.kind {
            PieceKind::Pawn => match self.player {
                Player::White => &WHITE_PAWN,
                Player::Black => &BLACK_PAWN,
            },
            PieceKind::Knight => &KNIGHT_JUMPS,
            PieceKind::Bishop => &DIAGONAL,
            PieceKind::Rook => &ORTHOGONAL,
            PieceKind::Queen | PieceKind::King => &ALL_DIRECTIONS,
        }
    }

    /// The same piece after moving to `dest`
    #[must_use]
    pub fn moved_to(&self, dest: Position) -> Piece {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(dest);
        Piece {
            kind: self.kind,
            player: self.player,
            position: dest,
            history,
        }
    }

    /// The piece a pawn turns into when promoting on `dest`
    #[must_use]
    pub(crate) fn promoted_to(&self, choice: PromotionChoice, dest: Position) -> Piece {
        Piece {
            kind: choice.kind(),
            ..self.moved_to(dest)
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.player, self.kind, self.position)
    }
}
