//! Knight move candidates.

use crate::board::Board;
use crate::moves::MoveKind;
use crate::piece::Piece;
use crate::square::Square;

/// Classify `from -> to` as a knight move candidate. Knights jump, so there
/// is no path check — only the L-shape and the destination's occupant.
pub(super) fn candidate(board: &Board, piece: &Piece, from: Square, to: Square) -> Option<MoveKind> {
    let rank_delta = (to.rank() as i8 - from.rank() as i8).abs();
    let file_delta = (to.file() as i8 - from.file() as i8).abs();
    let l_shape = (rank_delta == 2 && file_delta == 1) || (rank_delta == 1 && file_delta == 2);
    if !l_shape {
        return None;
    }

    match board.piece_at(to) {
        None => Some(MoveKind::Normal),
        Some(other) if other.color != piece.color => Some(MoveKind::Capture),
        Some(_) => None,
    }
}
