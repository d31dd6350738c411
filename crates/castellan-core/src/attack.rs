//! The king-safety oracle: square-attack detection.
//!
//! Attack detection deliberately ignores the "don't leave your own king in
//! check" legality clause; it answers only whether a raw attack pattern
//! reaches the square. This keeps the oracle non-recursive and safe to call
//! against provisionally applied positions. It never mutates the board.

use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceKind;
use crate::square::Square;

/// The eight knight move offsets.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The four orthogonal ray directions.
pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal ray directions.
pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Return `true` if any piece of `by` attacks `sq`.
///
/// Three independent scans: knight offsets, orthogonal rays, diagonal rays.
/// Rays stop at the first occupied square; kings count as attackers at ray
/// distance one, which is what keeps the two kings from ever standing
/// adjacent.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    knight_scan(board, sq, by) || orthogonal_scan(board, sq, by) || diagonal_scan(board, sq, by)
}

/// Return `true` if the king of `color` is currently attacked.
pub fn in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square(color), color.flip())
}

fn knight_scan(board: &Board, sq: Square, by: Color) -> bool {
    KNIGHT_OFFSETS.iter().any(|&(dr, df)| {
        sq.offset(dr, df)
            .and_then(|target| board.piece_at(target))
            .is_some_and(|piece| piece.color == by && piece.kind == PieceKind::Knight)
    })
}

fn orthogonal_scan(board: &Board, sq: Square, by: Color) -> bool {
    for (dr, df) in ORTHOGONAL_DIRS {
        let mut current = sq;
        let mut distance = 0u8;
        while let Some(next) = current.offset(dr, df) {
            distance += 1;
            if let Some(piece) = board.piece_at(next) {
                if piece.color == by {
                    match piece.kind {
                        PieceKind::Rook | PieceKind::Queen => return true,
                        PieceKind::King if distance == 1 => return true,
                        _ => {}
                    }
                }
                break;
            }
            current = next;
        }
    }
    false
}

fn diagonal_scan(board: &Board, sq: Square, by: Color) -> bool {
    for (dr, df) in DIAGONAL_DIRS {
        let mut current = sq;
        let mut distance = 0u8;
        while let Some(next) = current.offset(dr, df) {
            distance += 1;
            if let Some(piece) = board.piece_at(next) {
                if piece.color == by {
                    match piece.kind {
                        PieceKind::Bishop | PieceKind::Queen => return true,
                        PieceKind::King if distance == 1 => return true,
                        // A pawn attacks one square diagonally in its own
                        // forward direction, so from the target's point of
                        // view the ray must run against that direction.
                        PieceKind::Pawn if distance == 1 && by.pawn_direction() == -dr => {
                            return true;
                        }
                        _ => {}
                    }
                }
                break;
            }
            current = next;
        }
    }
    false
}
