//! Static evaluation.
//!
//! Scores are in centipawns from the perspective of the side to move, so a
//! positive score always means the mover is better. The score combines
//! material, piece-square bonuses, mobility, and pawn-structure penalties,
//! each computed for both sides and differenced.

mod material;
mod mobility;
mod pawns;
mod pst;

use castellan_core::{Board, Color, in_check, rules};

/// Score assigned to a position where the side to move is checkmated,
/// negated. Far above any material total, far below [`INF`].
pub const MATE: i32 = 900_000;

/// Sentinel larger than any reachable score, used as the initial
/// search window.
pub const INF: i32 = 1_000_000;

/// Penalty per doubled or blocked pawn.
const PAWN_STRUCTURE_PENALTY: i32 = 5;

/// Statically evaluate `board` from the perspective of `side_to_move`.
///
/// Terminal positions short-circuit: checkmate of the mover scores
/// `-MATE`, stalemate scores zero. Move existence is scanned once; the
/// check flag then distinguishes mate from stalemate.
pub fn evaluate(board: &Board, side_to_move: Color) -> i32 {
    if board.occupied_count() == 2 {
        return 0;
    }
    if !rules::has_any_move(board, side_to_move) {
        return if in_check(board, side_to_move) { -MATE } else { 0 };
    }
    side_score(board, side_to_move) - side_score(board, side_to_move.flip())
}

fn side_score(board: &Board, color: Color) -> i32 {
    material::material_and_position(board, color) + mobility::mobility(board, color)
        - PAWN_STRUCTURE_PENALTY
            * (pawns::doubled_count(board, color) + pawns::blocked_count(board, color))
}
