//! Piece-square tables.
//!
//! Positional bonuses added to raw material, one table per piece kind.
//! Tables are written visually: the first row is the eighth rank, so a
//! White piece indexes with its rank flipped and a Black piece indexes
//! directly — the two sides see vertically mirrored boards.

use castellan_core::{Color, PieceKind, Square};

type Table = [[i32; 8]; 8];

const PAWN: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 30, 30, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT: Table = [
    [-40, -30, -20, -20, -20, -20, -30, -40],
    [-30, -20, 0, 0, 0, 0, -20, -30],
    [-20, 0, 10, 15, 15, 10, 0, -20],
    [-20, 5, 15, 20, 20, 15, 5, -20],
    [-20, 0, 15, 20, 20, 15, 0, -20],
    [-20, 5, 10, 15, 15, 10, 5, -20],
    [-30, -20, 0, 5, 5, 0, -20, -30],
    [-40, -30, -20, -20, -20, -20, -30, -40],
];

const BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

/// Positional bonus for a piece of the given kind and color on `sq`.
pub(crate) fn bonus(kind: PieceKind, color: Color, sq: Square) -> i32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN,
        PieceKind::Knight => &KNIGHT,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Rook => &ROOK,
        PieceKind::Queen => &QUEEN,
        PieceKind::King => &KING,
    };
    let row = match color {
        Color::White => 7 - sq.rank(),
        Color::Black => sq.rank(),
    };
    table[row as usize][sq.file() as usize]
}

#[cfg(test)]
mod tests {
    use super::bonus;
    use castellan_core::{Color, PieceKind, Square};

    #[test]
    fn central_pawns_outscore_home_pawns() {
        let home = bonus(PieceKind::Pawn, Color::White, Square::E2);
        let center = bonus(PieceKind::Pawn, Color::White, Square::E4);
        assert!(center > home, "e4 ({center}) should beat e2 ({home})");
    }

    #[test]
    fn mirrored_squares_agree() {
        for kind in PieceKind::ALL {
            for sq in Square::all() {
                let mirror = Square::new(7 - sq.rank(), sq.file());
                assert_eq!(
                    bonus(kind, Color::White, sq),
                    bonus(kind, Color::Black, mirror),
                    "{kind:?} at {sq} vs {mirror}"
                );
            }
        }
    }

    #[test]
    fn king_prefers_its_corner() {
        let castled = bonus(PieceKind::King, Color::White, Square::G1);
        let center = bonus(PieceKind::King, Color::White, Square::E4);
        assert!(castled > center);
    }

    #[test]
    fn rim_knights_are_penalized() {
        assert!(bonus(PieceKind::Knight, Color::White, Square::A4) < 0);
        assert!(bonus(PieceKind::Knight, Color::White, Square::D4) > 0);
    }
}
