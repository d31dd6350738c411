//! Board squares as (rank, file) coordinate pairs.

use std::fmt;

/// A square on the chess board.
///
/// Rank 0 is White's home rank, rank 7 is Black's. File 0 is the a-file.
/// Both coordinates are always in `0..8`; constructing an out-of-range
/// square is a programming error and fails fast.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`. Out-of-range
    /// coordinates never originate from legal gameplay.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Square {
        assert!(rank < 8 && file < 8, "square coordinates out of range");
        Square { rank, file }
    }

    /// Return the rank (0..8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Return the file (0..8).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Offset this square by a (rank, file) delta, returning `None` if the
    /// result falls off the board.
    #[inline]
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        let rank = self.rank as i8 + rank_delta;
        let file = self.file as i8 + file_delta;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in board-scan order (rank-major:
    /// a1, b1, ..., h1, a2, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|rank| (0u8..8).map(move |file| Square { rank, file }))
    }

    // Named square constants.
    pub const A1: Square = Square::new(0, 0);
    pub const B1: Square = Square::new(0, 1);
    pub const C1: Square = Square::new(0, 2);
    pub const D1: Square = Square::new(0, 3);
    pub const E1: Square = Square::new(0, 4);
    pub const F1: Square = Square::new(0, 5);
    pub const G1: Square = Square::new(0, 6);
    pub const H1: Square = Square::new(0, 7);
    pub const A2: Square = Square::new(1, 0);
    pub const B2: Square = Square::new(1, 1);
    pub const C2: Square = Square::new(1, 2);
    pub const D2: Square = Square::new(1, 3);
    pub const E2: Square = Square::new(1, 4);
    pub const F2: Square = Square::new(1, 5);
    pub const G2: Square = Square::new(1, 6);
    pub const H2: Square = Square::new(1, 7);
    pub const A3: Square = Square::new(2, 0);
    pub const B3: Square = Square::new(2, 1);
    pub const C3: Square = Square::new(2, 2);
    pub const D3: Square = Square::new(2, 3);
    pub const E3: Square = Square::new(2, 4);
    pub const F3: Square = Square::new(2, 5);
    pub const G3: Square = Square::new(2, 6);
    pub const H3: Square = Square::new(2, 7);
    pub const A4: Square = Square::new(3, 0);
    pub const B4: Square = Square::new(3, 1);
    pub const C4: Square = Square::new(3, 2);
    pub const D4: Square = Square::new(3, 3);
    pub const E4: Square = Square::new(3, 4);
    pub const F4: Square = Square::new(3, 5);
    pub const G4: Square = Square::new(3, 6);
    pub const H4: Square = Square::new(3, 7);
    pub const A5: Square = Square::new(4, 0);
    pub const B5: Square = Square::new(4, 1);
    pub const C5: Square = Square::new(4, 2);
    pub const D5: Square = Square::new(4, 3);
    pub const E5: Square = Square::new(4, 4);
    pub const F5: Square = Square::new(4, 5);
    pub const G5: Square = Square::new(4, 6);
    pub const H5: Square = Square::new(4, 7);
    pub const A6: Square = Square::new(5, 0);
    pub const B6: Square = Square::new(5, 1);
    pub const C6: Square = Square::new(5, 2);
    pub const D6: Square = Square::new(5, 3);
    pub const E6: Square = Square::new(5, 4);
    pub const F6: Square = Square::new(5, 5);
    pub const G6: Square = Square::new(5, 6);
    pub const H6: Square = Square::new(5, 7);
    pub const A7: Square = Square::new(6, 0);
    pub const B7: Square = Square::new(6, 1);
    pub const C7: Square = Square::new(6, 2);
    pub const D7: Square = Square::new(6, 3);
    pub const E7: Square = Square::new(6, 4);
    pub const F7: Square = Square::new(6, 5);
    pub const G7: Square = Square::new(6, 6);
    pub const H7: Square = Square::new(6, 7);
    pub const A8: Square = Square::new(7, 0);
    pub const B8: Square = Square::new(7, 1);
    pub const C8: Square = Square::new(7, 2);
    pub const D8: Square = Square::new(7, 3);
    pub const E8: Square = Square::new(7, 4);
    pub const F8: Square = Square::new(7, 5);
    pub const G8: Square = Square::new(7, 6);
    pub const H8: Square = Square::new(7, 7);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
