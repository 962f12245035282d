//! Move generation.
//!
//! Moves are generated per piece. Pseudo-legal generation follows the
//! piece's movement rules and the board occupancy; legal generation
//! additionally simulates every candidate and drops those that leave the
//! mover's own king attacked.

mod kings;
mod pawns;
mod sliders;

use super::error::MoveError;
use super::{Board, Move, MoveSet, Piece, PieceKind, Player, Position, PromotionChoice};

/// Moves of `piece` on `board`.
///
/// With `validate_for_check`, only moves that keep the piece's own king out
/// of check are returned. Without it the result is pseudo-legal. Generation
/// works for either player regardless of whose turn it is.
#[must_use]
pub fn generate(board: &Board, piece: &Piece, validate_for_check: bool) -> MoveSet {
    let mut moves = MoveSet::new();
    match piece.kind() {
        PieceKind::Pawn => board.generate_pawn_moves(piece, &mut moves),
        PieceKind::Knight => board.generate_stepping_moves(piece, 1, &mut moves),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            board.generate_stepping_moves(piece, piece.kind().step_limit(), &mut moves)
        }
        PieceKind::King => board.generate_king_moves(piece, &mut moves),
    }

    if validate_for_check {
        moves.retain(|mv| board.keeps_king_safe(mv));
    }
    log::trace!(
        "generated {} moves for {piece} (validated: {validate_for_check})",
        moves.len()
    );
    moves
}

impl Piece {
    /// Moves of this piece on `board`; see [`generate`]
    #[must_use]
    pub fn generate_moves(&self, board: &Board, validate_for_check: bool) -> MoveSet {
        generate(board, self, validate_for_check)
    }
}

impl Board {
    /// Whether playing `mv` leaves the mover's king unattacked
    fn keeps_king_safe(&self, mv: &Move) -> bool {
        let mover = mv.piece().player();
        let after = self.simulate_move(mv);
        let king = after.king(mover).position();
        !after.is_attacked_by(king, mover.opponent())
    }

    /// All legal moves of `player`
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> MoveSet {
        self.pieces(player)
            .into_iter()
            .flat_map(|piece| generate(self, piece, true))
            .collect()
    }

    /// Whether `player` has at least one legal move
    #[must_use]
    pub fn has_legal_moves(&self, player: Player) -> bool {
        self.pieces(player)
            .into_iter()
            .any(|piece| !generate(self, piece, true).is_empty())
    }

    /// Resolves a move picked by origin and destination to a legal move of
    /// the side to move. Promotions need `promotion`; it is ignored otherwise.
    pub fn find_legal_move(
        &self,
        from: Position,
        to: Position,
        promotion: Option<PromotionChoice>,
    ) -> Result<Move, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPiece { position: from })?;
        if piece.player() != self.current_player() {
            return Err(MoveError::NotYourTurn {
                player: piece.player(),
            });
        }
        generate(self, piece, true)
            .into_iter()
            .find(|mv| {
                let choice = mv.promotion_choice();
                mv.dest() == to && (choice.is_none() || choice == promotion)
            })
            .ok_or(MoveError::IllegalMove { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_position_has_twenty_moves() {
        let board = Board::initial();
        let moves = board.legal_moves(Player::White);
        assert_eq!(moves.len(), 20);
        let pawn_moves = moves
            .iter()
            .filter(|m| m.piece().kind() == PieceKind::Pawn)
            .count();
        assert_eq!(pawn_moves, 16);
    }

    #[test]
    fn test_generation_ignores_turn() {
        let board = Board::initial();
        let knight = board.piece_at(pos("g8")).unwrap();
        assert_eq!(board.current_player(), Player::White);
        assert_eq!(knight.generate_moves(&board, true).len(), 2);
        assert_eq!(board.legal_moves(Player::Black).len(), 20);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let board = Board::initial();
        for piece in board.pieces(Player::White) {
            assert_eq!(generate(&board, piece, true), generate(&board, piece, true));
        }
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let board = BoardBuilder::new()
            .piece(pos("e1"), Player::White, PieceKind::King)
            .piece(pos("e2"), Player::White, PieceKind::Knight)
            .piece(pos("e8"), Player::Black, PieceKind::Rook)
            .piece(pos("a8"), Player::Black, PieceKind::King)
            .build();
        let knight = board.piece_at(pos("e2")).unwrap();
        assert!(!knight.generate_moves(&board, false).is_empty());
        assert!(knight.generate_moves(&board, true).is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let board = BoardBuilder::new()
            .piece(pos("e1"), Player::White, PieceKind::King)
            .piece(pos("d8"), Player::Black, PieceKind::Rook)
            .piece(pos("h8"), Player::Black, PieceKind::King)
            .build();
        let king = board.piece_at(pos("e1")).unwrap();
        let dests: Vec<Position> = king
            .generate_moves(&board, true)
            .iter()
            .map(Move::dest)
            .collect();
        assert!(!dests.contains(&pos("d1")));
        assert!(!dests.contains(&pos("d2")));
        assert!(dests.contains(&pos("f2")));
    }

    #[test]
    fn test_find_legal_move() {
        let board = Board::initial();
        let mv = board.find_legal_move(pos("g1"), pos("f3"), None).unwrap();
        assert_eq!(mv.piece().kind(), PieceKind::Knight);

        assert_eq!(
            board.find_legal_move(pos("e4"), pos("e5"), None),
            Err(MoveError::NoPiece { position: pos("e4") })
        );
        assert_eq!(
            board.find_legal_move(pos("e7"), pos("e5"), None),
            Err(MoveError::NotYourTurn {
                player: Player::Black
            })
        );
        assert_eq!(
            board.find_legal_move(pos("e2"), pos("e5"), None),
            Err(MoveError::IllegalMove {
                from: pos("e2"),
                to: pos("e5")
            })
        );
    }

    #[test]
    fn test_find_legal_move_with_promotion() {
        let board = BoardBuilder::new()
            .piece(pos("a7"), Player::White, PieceKind::Pawn)
            .piece(pos("e1"), Player::White, PieceKind::King)
            .piece(pos("h8"), Player::Black, PieceKind::King)
            .build();
        let mv = board
            .find_legal_move(pos("a7"), pos("a8"), Some(PromotionChoice::Knight))
            .unwrap();
        assert_eq!(mv.promotion_choice(), Some(PromotionChoice::Knight));
        assert!(board.find_legal_move(pos("a7"), pos("a8"), None).is_err());
    }
}
