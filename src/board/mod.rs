//! Chess board representation and rules.
//!
//! Boards are immutable snapshots: playing a move returns a new board.
//! Move generation follows each piece's movement rules and filters out
//! moves that would leave the mover's king attacked. Attack detection runs
//! on bitboards derived from the squares.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Player};
//!
//! let board = Board::initial();
//! let moves = board.legal_moves(Player::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod check;
mod error;
mod movegen;
mod notation;
mod occupancy;
mod result;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, PositionError, PromotionError};
pub use movegen::generate;
pub use notation::{MovePair, NotationStyle};
pub use result::{DrawType, GameResult, WinType};
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, Direction, Move, MoveSet, Piece, PieceKind, Player, Position,
    PromotionChoice, Square,
};
