//! Piece kinds and per-piece state.

use std::fmt;

use crate::color::Color;

/// The six kinds of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 6;

    /// All kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the zero-based index of this kind.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Relative material value in centipawns.
    ///
    /// The king's value is a sentinel large enough that no combination of
    /// other pieces outweighs it.
    #[inline]
    pub const fn material_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20_000,
        }
    }

    /// Single-letter abbreviation used in board printouts.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece on the board, with the state its movement rules depend on.
///
/// `has_moved` gates a pawn's two-square advance and the castling
/// eligibility of kings and rooks. `passant_vulnerable` is set on a pawn
/// for exactly one ply after it advances two squares, marking it capturable
/// en passant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
    pub passant_vulnerable: bool,
}

impl Piece {
    /// Create a piece in its pre-game state (never moved).
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
            passant_vulnerable: false,
        }
    }

    /// Return `true` if this pawn may still advance two squares.
    #[inline]
    pub const fn can_double_advance(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn) && !self.has_moved
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.kind.letter();
        match self.color {
            Color::White => write!(f, "{letter}"),
            Color::Black => write!(f, "{}", letter.to_ascii_lowercase()),
        }
    }
}
