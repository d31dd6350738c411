//! Perft: legal-move path counting for validating the legality engine.

use crate::board::Board;
use crate::color::Color;
use crate::rules::legal_moves;

/// Count the leaf nodes of the legal-move tree to the given depth, with
/// `side` to move, using make/unmake on the supplied board.
///
/// The board is returned to its input state before this function returns.
pub fn perft(board: &mut Board, depth: u32, side: Color) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in legal_moves(board, side) {
        let undo = board.apply(&mv);
        nodes += perft(board, depth - 1, side.flip());
        board.undo(&mv, undo);
    }
    nodes
}
