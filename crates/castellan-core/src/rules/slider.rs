//! Sliding piece move candidates: bishop, rook, queen.

use crate::board::Board;
use crate::moves::MoveKind;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Classify `from -> to` as a sliding move candidate: the line must match
/// the piece's shape, every square strictly between must be empty, and the
/// destination must not hold a friendly piece.
pub(super) fn candidate(board: &Board, piece: &Piece, from: Square, to: Square) -> Option<MoveKind> {
    if !shape_ok(piece.kind, from, to) || !path_clear(board, from, to) {
        return None;
    }

    match board.piece_at(to) {
        None => Some(MoveKind::Normal),
        Some(other) if other.color != piece.color => Some(MoveKind::Capture),
        Some(_) => None,
    }
}

/// Return `true` if `from -> to` matches the piece's geometric movement
/// pattern, ignoring obstruction.
pub(super) fn shape_ok(kind: PieceKind, from: Square, to: Square) -> bool {
    let rank_delta = (to.rank() as i8 - from.rank() as i8).abs();
    let file_delta = (to.file() as i8 - from.file() as i8).abs();
    let straight = (rank_delta == 0) != (file_delta == 0);
    let diagonal = rank_delta == file_delta && rank_delta != 0;

    match kind {
        PieceKind::Rook => straight,
        PieceKind::Bishop => diagonal,
        PieceKind::Queen => straight || diagonal,
        _ => false,
    }
}

/// Return `true` if no piece occupies any square strictly between `from`
/// and `to` along their shared line.
pub(super) fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let rank_step = (to.rank() as i8 - from.rank() as i8).signum();
    let file_step = (to.file() as i8 - from.file() as i8).signum();

    let mut current = from;
    loop {
        current = match current.offset(rank_step, file_step) {
            Some(sq) => sq,
            None => return true,
        };
        if current == to {
            return true;
        }
        if board.piece_at(current).is_some() {
            return false;
        }
    }
}
