//! Fluent builder for constructing chess positions.
//!
//! Places pieces on an empty board before the snapshot is published, which is
//! how test and puzzle positions are set up without replaying a whole game.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, PieceKind, Player, Position};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Player::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Player::Black, PieceKind::King)
//!     .piece("a7".parse().unwrap(), Player::White, PieceKind::Pawn)
//!     .side_to_move(Player::White)
//!     .build();
//! assert_eq!(board.pieces(Player::White).len(), 2);
//! ```

use std::collections::HashSet;

use super::state::starting_pieces;
use super::{Board, Piece, PieceKind, Player, Position};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Position, Player, PieceKind)>,
    moved: HashSet<Position>,
    side_to_move: Player,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            moved: HashSet::new(),
            side_to_move: Player::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for piece in starting_pieces() {
            builder
                .pieces
                .push((piece.position(), piece.player(), piece.kind()));
        }
        builder
    }

    /// Place a piece on the board, replacing any piece already there.
    ///
    /// # Panics
    /// Panics if `position` is off the board.
    #[must_use]
    pub fn piece(mut self, position: Position, player: Player, kind: PieceKind) -> Self {
        assert!(position.is_valid(), "cannot place a piece on {position}");
        self.pieces.retain(|(pos, _, _)| *pos != position);
        self.moved.remove(&position);
        self.pieces.push((position, player, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, position: Position) -> Self {
        self.pieces.retain(|(pos, _, _)| *pos != position);
        self.moved.remove(&position);
        self
    }

    /// Mark the piece on `position` as having moved before, which takes
    /// away its castling or double-step rights.
    #[must_use]
    pub fn moved(mut self, position: Position) -> Self {
        self.moved.insert(position);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, player: Player) -> Self {
        self.side_to_move = player;
        self
    }

    /// Build the board.
    ///
    /// Pawns off their start row, kings off their home square and rooks off
    /// their home corners are recorded as having moved there.
    #[must_use]
    pub fn build(self) -> Board {
        let pieces = self
            .pieces
            .iter()
            .map(|&(position, player, kind)| {
                let piece = Piece::new(kind, player, position);
                if self.moved.contains(&position) || !on_home_square(&piece) {
                    Piece {
                        history: vec![position],
                        ..piece
                    }
                } else {
                    piece
                }
            })
            .collect();
        Board::from_pieces(pieces, self.side_to_move)
    }
}

/// Whether an unmoved piece could stand where `piece` stands
fn on_home_square(piece: &Piece) -> bool {
    let pos = piece.position();
    let back_row = piece.player().back_row();
    match piece.kind() {
        PieceKind::Pawn => pos.row() == piece.player().pawn_row(),
        PieceKind::King => pos == Position::new(back_row, 4),
        PieceKind::Rook => pos.row() == back_row && (pos.col() == 0 || pos.col() == 7),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
    }
}
