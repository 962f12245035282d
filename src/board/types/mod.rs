//! Core chess types.
//!
//! - `Position` and `Direction` - coordinates and step vectors
//! - `Player` - the two sides
//! - `PieceKind`, `Piece` and `PromotionChoice` - immutable pieces
//! - `Square` - a cell and its occupant
//! - `Move` and `MoveSet` - move variants
//! - `Bitboard` - 64-bit position sets

mod bitboard;
mod moves;
mod piece;
mod player;
mod position;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveSet};
pub use piece::{Piece, PieceKind, PromotionChoice};
pub use player::Player;
pub use position::{Direction, Position};
pub use square::Square;
