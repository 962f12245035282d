//! Error types for board operations.

use std::fmt;

use super::{GameResult, PieceKind, Player, Position};

/// Error type for position lookups and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Row or column outside 0-7
    OutOfBounds { row: i8, col: i8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::OutOfBounds { row, col } => {
                write!(f, "Position ({row}, {col}) is not on the board")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for promotion choices made outside the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionError {
    /// Pawns may only promote to a knight, bishop, rook or queen
    UnsupportedPiece { kind: PieceKind },
}

impl fmt::Display for PromotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionError::UnsupportedPiece { kind } => {
                write!(f, "Cannot promote to a {kind}")
            }
        }
    }
}

impl std::error::Error for PromotionError {}

/// Error type for moves submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    NoPiece { position: Position },
    /// The piece belongs to the side not on turn
    NotYourTurn { player: Player },
    /// The move is not among the legal moves of its piece
    IllegalMove { from: Position, to: Position },
    /// The game already ended
    GameOver { result: GameResult },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece { position } => {
                write!(f, "No piece on {position}")
            }
            MoveError::NotYourTurn { player } => {
                write!(f, "{player} is not on turn")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}-{to}")
            }
            MoveError::GameOver { result } => {
                write!(f, "Game is over ({result})")
            }
        }
    }
}

impl std::error::Error for MoveError {}
