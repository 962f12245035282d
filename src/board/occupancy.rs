//! Per-kind, per-player bitboards derived from a board's squares.

use super::attack_tables::{bishop_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use super::{Bitboard, PieceKind, Player, Position, Square};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub(crate) struct Occupancy {
    pieces: [[Bitboard; 6]; 2],
    by_player: [Bitboard; 2],
    all: Bitboard,
}

impl Occupancy {
    pub(crate) fn from_squares(squares: &[Square]) -> Self {
        let mut occ = Occupancy::default();
        for piece in squares.iter().filter_map(Square::piece) {
            let (p_idx, k_idx) = (piece.player().index(), piece.kind().index());
            occ.pieces[p_idx][k_idx].insert(piece.position());
            occ.by_player[p_idx].insert(piece.position());
            occ.all.insert(piece.position());
        }
        occ
    }

    #[inline]
    pub(crate) fn pieces_of(&self, player: Player, kind: PieceKind) -> Bitboard {
        self.pieces[player.index()][kind.index()]
    }

    #[inline]
    pub(crate) fn occupied_by(&self, player: Player) -> Bitboard {
        self.by_player[player.index()]
    }

    /// Pieces of `attacker` that attack `target`.
    ///
    /// Attacks are looked up from the target outwards: a knight of `attacker`
    /// attacks `target` iff a knight on `target` would reach it, and so on for
    /// every kind. Pawns use the defender's pawn table for the same reason.
    pub(crate) fn attackers(&self, target: Position, attacker: Player) -> Bitboard {
        let sq = target.index();
        let all = self.all.0;
        let of = |kind| self.pieces_of(attacker, kind).0;

        let pawns = PAWN_ATTACKS[attacker.opponent().index()][sq] & of(PieceKind::Pawn);
        let knights = KNIGHT_ATTACKS[sq] & of(PieceKind::Knight);
        let kings = KING_ATTACKS[sq] & of(PieceKind::King);
        let diagonal = bishop_attacks(sq, all) & (of(PieceKind::Bishop) | of(PieceKind::Queen));
        let straight = rook_attacks(sq, all) & (of(PieceKind::Rook) | of(PieceKind::Queen));

        Bitboard(pawns | knights | kings | diagonal | straight)
    }
}
