//! Attack and check detection.

use super::{Board, Player, Position};

impl Board {
    /// Whether some piece of `attacker` could move to `position`, ignoring
    /// whether that move would expose its own king.
    ///
    /// A square held by one of `attacker`'s own pieces is never attacked by
    /// them. Pawns attack diagonally forward only, whether or not the square
    /// is occupied; their pushes are not attacks. Off-board positions are
    /// never attacked.
    #[must_use]
    pub fn is_attacked_by(&self, position: Position, attacker: Player) -> bool {
        if !position.is_valid() || self.occupancy.occupied_by(attacker).contains(position) {
            return false;
        }
        !self.occupancy.attackers(position, attacker).is_empty()
    }

    /// Whether the opponent of the side to move attacks `position`
    #[inline]
    #[must_use]
    pub fn is_under_attack(&self, position: Position) -> bool {
        self.is_attacked_by(position, self.current_player.opponent())
    }

    /// Whether the side to move is in check
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.is_under_attack(self.king(self.current_player).position())
    }

    /// Whether the side to move is checkmated
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves(self.current_player)
    }

    /// Whether the side to move is stalemated
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves(self.current_player)
    }
}
