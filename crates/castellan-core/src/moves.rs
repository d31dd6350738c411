//! Chess move representation.

use std::fmt;

use crate::square::Square;

/// The category of a chess move, determining how `apply` executes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A quiet move to an empty square.
    Normal,
    /// A move that captures the piece on the destination.
    Capture,
    /// A pawn's initial two-square advance.
    DoubleAdvance,
    /// An en passant capture; the victim is not on the destination square.
    EnPassant,
    /// Kingside castling (king to the g-file, rook to the f-file).
    CastleKingside,
    /// Queenside castling (king to the c-file, rook to the d-file).
    CastleQueenside,
    /// A pawn reaching the last rank, always promoting to a queen.
    ///
    /// May also capture; the undo token records any victim.
    Promotion,
}

impl MoveKind {
    /// Return `true` for either castling kind.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// A chess move: source square, destination square, and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Move {
        Move { from, to, kind }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == MoveKind::Promotion {
            write!(f, "{}{}q", self.from, self.to)
        } else {
            write!(f, "{}{}", self.from, self.to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind};
    use crate::square::Square;

    #[test]
    fn display_plain() {
        let mv = Move::new(Square::E2, Square::E4, MoveKind::DoubleAdvance);
        assert_eq!(format!("{mv}"), "e2e4");
    }

    #[test]
    fn display_promotion() {
        let mv = Move::new(Square::E7, Square::E8, MoveKind::Promotion);
        assert_eq!(format!("{mv}"), "e7e8q");
    }

    #[test]
    fn castle_predicate() {
        assert!(MoveKind::CastleKingside.is_castle());
        assert!(MoveKind::CastleQueenside.is_castle());
        assert!(!MoveKind::Capture.is_castle());
    }
}
