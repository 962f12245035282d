//! Attack tables for attack detection.
//!
//! Uses Hyperbola Quintessence for sliding piece attacks (bishop, rook, queen).
//! This is a fast, branch-free algorithm that uses the `o^(o-2r)` trick.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates
#![allow(clippy::inline_always)] // Hot path of every legality check

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use once_cell::sync::Lazy;

const FIRST_COL: u64 = 0x0101010101010101;

/// Mask of the full line through `sq` along (`dr`, `dc`), both ways
fn line_mask(sq: usize, dr: i8, dc: i8) -> u64 {
    let r = (sq / 8) as i8;
    let c = (sq % 8) as i8;
    let mut mask = 1u64 << sq;
    for sign in [1, -1] {
        let mut nr = r + dr * sign;
        let mut nc = c + dc * sign;
        while (0..8).contains(&nr) && (0..8).contains(&nc) {
            mask |= 1u64 << ((nr as usize) * 8 + nc as usize);
            nr += dr * sign;
            nc += dc * sign;
        }
    }
    mask
}

/// Diagonal masks for each square (row and column growing together)
static DIAG_MASKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut masks = [0u64; 64];
    for sq in 0..64 {
        masks[sq] = line_mask(sq, 1, 1);
    }
    masks
});

/// Anti-diagonal masks for each square (row growing, column shrinking)
static ANTI_MASKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut masks = [0u64; 64];
    for sq in 0..64 {
        masks[sq] = line_mask(sq, 1, -1);
    }
    masks
});

/// Column masks for each square
static COL_MASKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut masks = [0u64; 64];
    for sq in 0..64 {
        masks[sq] = FIRST_COL << (sq % 8);
    }
    masks
});

/// Row attack lookup table: `[8 * occupancy_6bit + col]` -> attacks along row 0
static ROW_ATTACKS: Lazy<[u64; 512]> = Lazy::new(|| {
    let mut attacks = [0u64; 512];
    for occ_6bit in 0..64 {
        for col in 0..8 {
            let mut attack = 0u64;
            for c in (col + 1)..8 {
                attack |= 1u64 << c;
                // Occupancy bits 0-5 stand for columns 1-6
                if (1..=6).contains(&c) && (occ_6bit & (1 << (c - 1))) != 0 {
                    break;
                }
            }
            for c in (0..col).rev() {
                attack |= 1u64 << c;
                if (1..=6).contains(&c) && (occ_6bit & (1 << (c - 1))) != 0 {
                    break;
                }
            }
            attacks[8 * occ_6bit + col] = attack;
        }
    }
    attacks
});

/// Hyperbola Quintessence attack calculation along one line.
/// Works for every line holding at most one square per row, since the
/// byteswap then reverses the line. `square` itself may or may not be
/// occupied.
#[inline(always)]
fn hyp_quint(occupied: u64, mask: u64, square: usize) -> u64 {
    let piece_bit = 1u64 << square;
    let line = mask & !piece_bit;
    let forward = occupied & line;
    let backward = forward.swap_bytes();
    let forward_attacks = forward.wrapping_sub(piece_bit);
    let backward_attacks = backward.wrapping_sub(piece_bit.swap_bytes()).swap_bytes();
    (forward_attacks ^ backward_attacks) & line
}

#[inline(always)]
fn row_attacks(occupied: u64, square: usize) -> u64 {
    let row = square / 8;
    let col = square % 8;
    let occ_6bit = ((occupied >> (row * 8 + 1)) & 63) as usize;
    ROW_ATTACKS[8 * occ_6bit + col] << (row * 8)
}

/// Diagonal and anti-diagonal attacks from `square`
#[inline]
pub(crate) fn bishop_attacks(square: usize, occupied: u64) -> u64 {
    hyp_quint(occupied, DIAG_MASKS[square], square) | hyp_quint(occupied, ANTI_MASKS[square], square)
}

/// Row and column attacks from `square`
#[inline]
pub(crate) fn rook_attacks(square: usize, occupied: u64) -> u64 {
    hyp_quint(occupied, COL_MASKS[square], square) | row_attacks(occupied, square)
}
