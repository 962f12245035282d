//! Bitboard type and operations.
//!
//! Bit `row * 8 + col` stands for the position `(row, col)`, so bit 0 is a8
//! and bit 63 is h1.

use super::position::Position;

/// A 64-bit set of board positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Returns an iterator over the positions set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        (self.0 & (1 << pos.index())) != 0
    }

    #[inline]
    pub fn insert(&mut self, pos: Position) {
        self.0 |= 1 << pos.index();
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Position {
    let idx = bb.0.trailing_zeros() as usize;
    bb.0 &= bb.0 - 1;
    Position::from_index(idx)
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_yields_row_major_order() {
        let mut bb = Bitboard::default();
        bb.insert(Position::new(7, 7));
        bb.insert(Position::new(0, 1));
        bb.insert(Position::new(3, 2));

        let positions: Vec<Position> = bb.iter().collect();
        assert_eq!(
            positions,
            vec![Position::new(0, 1), Position::new(3, 2), Position::new(7, 7)]
        );
        assert_eq!(bb.popcount(), 3);
    }

    #[test]
    fn test_contains() {
        let mut bb = Bitboard::default();
        assert!(bb.is_empty());
        bb.insert(Position::new(4, 4));
        assert!(bb.contains(Position::new(4, 4)));
        assert!(!bb.contains(Position::new(4, 5)));
    }
}
