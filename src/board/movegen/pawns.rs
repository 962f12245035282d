use super::super::{Board, Direction, Move, MoveSet, Piece, Position, PromotionChoice};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece, moves: &mut MoveSet) {
        let player = pawn.player();
        let dir = player.pawn_direction();
        let from = pawn.position();
        let is_empty = |pos: Position| self.square_or_none(pos).is_some_and(|sq| sq.is_empty());

        let forward_one = from + Direction::new(dir, 0);
        if is_empty(forward_one) {
            push_pawn_move(pawn, forward_one, false, moves);

            let forward_two = from + Direction::new(dir * 2, 0);
            if !pawn.has_moved() && is_empty(forward_two) {
                moves.insert(Move::basic(pawn, forward_two, false));
            }
        }

        for d_col in [-1, 1] {
            let target = from + Direction::new(dir, d_col);
            let holds_opponent = self
                .square_or_none(target)
                .is_some_and(|sq| sq.is_occupied_by(player.opponent()));
            if holds_opponent {
                push_pawn_move(pawn, target, true, moves);
            }
        }

        if let Some(mv) = self.en_passant_move(pawn) {
            moves.insert(mv);
        }
    }

    /// The en passant capture open to `pawn`, if the last move was an
    /// opponent pawn's double step that ended right beside it.
    fn en_passant_move(&self, pawn: &Piece) -> Option<Move> {
        let last = self.last_move()?;
        let Move::Basic {
            piece: mover,
            dest: landed,
            ..
        } = last
        else {
            return None;
        };
        if !last.is_double_step() || mover.player() == pawn.player() {
            return None;
        }
        let from = pawn.position();
        if landed.row() != from.row() || (landed.col() - from.col()).abs() != 1 {
            return None;
        }
        Some(Move::EnPassant {
            pawn: pawn.clone(),
            dest: *landed + Direction::new(pawn.player().pawn_direction(), 0),
            captured_pawn: *landed,
        })
    }
}

/// Adds a pawn move, expanding it into every promotion choice on the last row
fn push_pawn_move(pawn: &Piece, dest: Position, captured: bool, moves: &mut MoveSet) {
    if dest.row() == pawn.player().promotion_row() {
        for choice in PromotionChoice::ALL {
            moves.insert(Move::promotion(pawn, dest, captured, choice));
        }
    } else {
        moves.insert(Move::basic(pawn, dest, captured));
    }
}
