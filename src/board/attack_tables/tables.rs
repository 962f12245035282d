//! Precomputed attack tables for leaper pieces (knights, kings, pawns).

use once_cell::sync::Lazy;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Mask of the on-board squares reached from `sq` by each delta
fn leaper_mask(sq: usize, deltas: &[(i8, i8)]) -> u64 {
    let r = (sq / 8) as i8;
    let c = (sq % 8) as i8;
    let mut mask = 0u64;
    for &(dr, dc) in deltas {
        let nr = r + dr;
        let nc = c + dc;
        if (0..8).contains(&nr) && (0..8).contains(&nc) {
            mask |= 1u64 << ((nr as usize) * 8 + nc as usize);
        }
    }
    mask
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = leaper_mask(sq, &KNIGHT_DELTAS);
    }
    attacks
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = leaper_mask(sq, &KING_DELTAS);
    }
    attacks
});

/// `PAWN_ATTACKS[player][sq]`: squares a pawn of `player` standing on `sq`
/// attacks. White pawns capture towards row 0, Black pawns towards row 7.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for sq in 0..64 {
        attacks[0][sq] = leaper_mask(sq, &[(-1, -1), (-1, 1)]);
        attacks[1][sq] = leaper_mask(sq, &[(1, -1), (1, 1)]);
    }
    attacks
});
