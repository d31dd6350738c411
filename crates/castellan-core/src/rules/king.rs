//! King move candidates: single steps and castling.

use crate::attack::is_square_attacked;
use crate::board::Board;
use crate::moves::MoveKind;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Classify `from -> to` as a king move candidate.
pub(super) fn candidate(board: &Board, piece: &Piece, from: Square, to: Square) -> Option<MoveKind> {
    let rank_delta = (to.rank() as i8 - from.rank() as i8).abs();
    let file_delta = to.file() as i8 - from.file() as i8;

    // One step in any direction.
    if rank_delta <= 1 && file_delta.abs() <= 1 {
        return match board.piece_at(to) {
            None => Some(MoveKind::Normal),
            Some(other) if other.color != piece.color => Some(MoveKind::Capture),
            Some(_) => None,
        };
    }

    // Castling: the king slides two files along its home rank.
    if rank_delta == 0 && file_delta.abs() == 2 {
        let kingside = file_delta > 0;
        if castle_eligible(board, piece, from, kingside) {
            return Some(if kingside {
                MoveKind::CastleKingside
            } else {
                MoveKind::CastleQueenside
            });
        }
    }

    None
}

/// Check castling eligibility under the standard rule: king and rook both
/// unmoved, every square between them empty, and the king's start, transit,
/// and landing squares all unattacked. Squares only the rook crosses need
/// not be safe.
fn castle_eligible(board: &Board, king: &Piece, from: Square, kingside: bool) -> bool {
    if king.has_moved {
        return false;
    }

    let rank = from.rank();
    let rook_sq = Square::new(rank, if kingside { 7 } else { 0 });
    let rook_ok = board.piece_at(rook_sq).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    });
    if !rook_ok {
        return false;
    }

    let between: &[u8] = if kingside { &[5, 6] } else { &[1, 2, 3] };
    if between
        .iter()
        .any(|&file| board.piece_at(Square::new(rank, file)).is_some())
    {
        return false;
    }

    // King path: start, the square it crosses, and where it lands.
    let enemy = king.color.flip();
    let king_path: [u8; 3] = if kingside {
        [from.file(), 5, 6]
    } else {
        [from.file(), 3, 2]
    };
    !king_path
        .iter()
        .any(|&file| is_square_attacked(board, Square::new(rank, file), enemy))
}
