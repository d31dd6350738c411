//! Negamax alpha-beta over the legal-move tree.

use castellan_core::{Board, Color, rules, terminal};

use crate::eval::{INF, evaluate};
use crate::search::control::SearchControl;

/// Per-search state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    pub nodes: u64,
    pub control: &'a SearchControl,
}

/// Negamax alpha-beta search.
///
/// Returns the best score for `side`, who is to move. A window of
/// `(alpha, beta)` prunes subtrees that cannot affect the result; with the
/// full window the score equals a plain minimax of [`evaluate`] leaves.
///
/// The board is mutated in place with make/unmake and is restored before
/// returning. If the control aborts mid-search the returned score is
/// meaningless and must be discarded by the caller.
pub(super) fn negamax(
    board: &mut Board,
    depth: u32,
    side: Color,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    if ctx.control.should_stop(ctx.nodes) {
        return 0;
    }

    // Leaf on exhausted depth or a finished game; the evaluator scores
    // mate, stalemate, and the bare-kings draw itself. Bare kings still
    // have legal king moves, so this cannot be a moves-empty check.
    if depth == 0 || terminal(board, side) {
        return evaluate(board, side);
    }

    let mut best = -INF;
    for mv in rules::legal_moves(board, side) {
        let undo = board.apply(&mv);
        let score = -negamax(board, depth - 1, side.flip(), -beta, -alpha, ctx);
        board.undo(&mv, undo);

        if score > best {
            best = score;
            if score > alpha {
                alpha = score;
            }
        }

        if alpha >= beta {
            break;
        }
    }

    best
}
