//! Chess rules: board snapshots, legal move generation, check detection
//! and game outcomes.
//!
//! # Example
//! ```
//! use chess_rules::{Game, GameResult};
//!
//! let mut game = Game::new();
//! game.play_from_to("e2".parse().unwrap(), "e4".parse().unwrap(), None)
//!     .unwrap();
//! assert_eq!(game.result(), GameResult::StillPlaying);
//! ```

pub mod board;
pub mod game;

pub use board::{Board, BoardBuilder, GameResult, Move, MoveError, Piece, PieceKind, Player, Position};
pub use game::Game;
