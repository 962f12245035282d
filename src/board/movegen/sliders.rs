use super::super::{Board, Move, MoveSet, Piece};

impl Board {
    /// Walks each of the piece's directions up to `max_distance` steps.
    ///
    /// Empty squares add a quiet move and the walk goes on; an opponent's
    /// piece adds a capture and ends the walk; an own piece or the board edge
    /// ends it without a move.
    pub(crate) fn generate_stepping_moves(&self, piece: &Piece, max_distance: i8, moves: &mut MoveSet) {
        let player = piece.player();
        for &dir in piece.directions() {
            for distance in 1..=max_distance {
                let dest = piece.position() + dir * distance;
                let Some(square) = self.square_or_none(dest) else {
                    break;
                };
                if square.is_empty() {
                    moves.insert(Move::basic(piece, dest, false));
                    continue;
                }
                if !square.is_occupied_by(player) {
                    moves.insert(Move::basic(piece, dest, true));
                }
                break;
            }
        }
    }
}
