use super::super::{Board, Direction, Move, MoveSet, Piece, PieceKind, Position};

impl Board {
    pub(crate) fn generate_king_moves(&self, king: &Piece, moves: &mut MoveSet) {
        self.generate_stepping_moves(king, PieceKind::King.step_limit(), moves);
        if king.has_moved() {
            return;
        }
        for queen_side in [false, true] {
            if let Some(mv) = self.castling_move(king, queen_side) {
                moves.insert(mv);
            }
        }
    }

    /// Castling towards the rook on column 0 (`queen_side`) or 7.
    ///
    /// Both pieces must be unmoved and everything between them empty. The
    /// king may not leave, cross or land on an attacked square, which the
    /// end-position check applied to ordinary moves cannot see on its own.
    fn castling_move(&self, king: &Piece, queen_side: bool) -> Option<Move> {
        let from = king.position();
        let (rook_col, step) = if queen_side { (0, -1) } else { (7, 1) };

        let rook = self.piece_at(Position::new(from.row(), rook_col))?;
        if rook.kind() != PieceKind::Rook || rook.player() != king.player() || rook.has_moved() {
            return None;
        }

        let toward_rook = Direction::new(0, step);
        let between = (from.col() - rook_col).abs() - 1;
        let path_clear = (1..=between).all(|d| {
            self.square_or_none(from + toward_rook * d)
                .is_some_and(|sq| sq.is_empty())
        });
        if !path_clear {
            return None;
        }

        let opponent = king.player().opponent();
        let king_path_safe =
            (0..=2).all(|d| !self.is_attacked_by(from + toward_rook * d, opponent));
        if !king_path_safe {
            return None;
        }

        Some(Move::Castling {
            king: king.clone(),
            king_dest: from + toward_rook * 2,
            rook: rook.clone(),
            rook_dest: from + toward_rook,
            queen_side,
        })
    }
}
