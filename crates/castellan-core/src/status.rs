//! Terminal-state detection: checkmate, stalemate, and the bare-kings draw.

use crate::attack::in_check;
use crate::board::Board;
use crate::color::Color;
use crate::rules::has_any_move;

/// Return `true` if the given side is checkmated: its king is attacked and
/// no friendly piece has a legal move.
pub fn checkmate(board: &Board, side: Color) -> bool {
    in_check(board, side) && !has_any_move(board, side)
}

/// Return `true` if the position is a stalemate draw for the given side:
/// either only the two kings remain, or the side is not in check yet has no
/// legal move.
pub fn stalemate(board: &Board, side: Color) -> bool {
    if board.occupied_count() == 2 {
        return true;
    }
    !in_check(board, side) && !has_any_move(board, side)
}

/// Return `true` if the game is over for the given side to move.
///
/// Equivalent to `checkmate || stalemate`, collapsed to a single
/// move-existence scan: with bare kings aside, the game is over exactly
/// when the side has no legal move, and the check flag only decides which
/// ending it was.
pub fn terminal(board: &Board, side: Color) -> bool {
    board.occupied_count() == 2 || !has_any_move(board, side)
}
