//! Pawn move candidates: advances, diagonal captures, en passant, promotion.

use crate::board::Board;
use crate::moves::MoveKind;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Classify `from -> to` as a pawn move candidate, or `None` if the pawn
/// cannot make that move. King safety is not considered here.
pub(super) fn candidate(board: &Board, piece: &Piece, from: Square, to: Square) -> Option<MoveKind> {
    let dir = piece.color.pawn_direction();
    let rank_delta = to.rank() as i8 - from.rank() as i8;
    let file_delta = (to.file() as i8 - from.file() as i8).abs();
    let promotion = to.rank() == piece.color.promotion_rank();

    // En passant: only from the passing rank, only against an enemy pawn
    // that double-advanced on the previous ply.
    if from.rank() == passing_rank(dir)
        && rank_delta == dir
        && file_delta == 1
        && board.piece_at(to).is_none()
    {
        let victim_sq = Square::new(from.rank(), to.file());
        if board.piece_at(victim_sq).is_some_and(|victim| {
            victim.color != piece.color
                && victim.kind == PieceKind::Pawn
                && victim.passant_vulnerable
        }) {
            return Some(MoveKind::EnPassant);
        }
    }

    // Diagonal capture: exactly one square diagonally forward onto an enemy.
    if rank_delta == dir && file_delta == 1 {
        if board
            .piece_at(to)
            .is_some_and(|victim| victim.color != piece.color)
        {
            return Some(if promotion {
                MoveKind::Promotion
            } else {
                MoveKind::Capture
            });
        }
        return None;
    }

    if file_delta != 0 {
        return None;
    }

    // Single advance: destination itself must be empty.
    if rank_delta == dir && board.piece_at(to).is_none() {
        return Some(if promotion {
            MoveKind::Promotion
        } else {
            MoveKind::Normal
        });
    }

    // Double advance: first move only, both squares empty.
    if rank_delta == 2 * dir && piece.can_double_advance() {
        let step = from.offset(dir, 0)?;
        if board.piece_at(step).is_none() && board.piece_at(to).is_none() {
            return Some(MoveKind::DoubleAdvance);
        }
    }

    None
}

/// The rank a pawn must occupy to capture en passant: one double-advance
/// away from the enemy's pawn rank.
const fn passing_rank(dir: i8) -> u8 {
    if dir == 1 { 4 } else { 3 }
}
