//! Depth-limited best-move search.

pub mod control;
mod negamax;

use castellan_core::{Board, Color, Move, rules, terminal};
use tracing::debug;

use crate::eval::{INF, evaluate};
use control::SearchControl;
use negamax::{SearchContext, negamax};

/// Result of a completed (or aborted) search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move found, or `None` if the position is terminal, the depth
    /// was zero, or the search was stopped before finishing a root move.
    pub best: Option<Move>,
    /// Score of `best` in centipawns for the side to move.
    pub score: i32,
    /// Nodes visited.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u32,
}

/// Search `depth` plies ahead and return the best move for `side`.
///
/// Root moves are scanned in the same deterministic order the legality
/// engine generates them, and only a strictly better score displaces the
/// incumbent, so ties go to the first move encountered. The board is
/// restored to its input state before returning.
///
/// If `control` stops the search, the move whose subtree was in progress
/// is discarded and the best fully-searched move so far is returned.
pub fn best_move(
    board: &mut Board,
    depth: u32,
    side: Color,
    control: &SearchControl,
) -> SearchOutcome {
    let mut ctx = SearchContext { nodes: 0, control };
    let mut best = None;
    let mut best_score = -INF;
    let mut alpha = -INF;

    // A finished game gets no move, even when (as with bare kings) legal
    // king moves still exist.
    if depth > 0 && !terminal(board, side) {
        for mv in rules::legal_moves(board, side) {
            if control.should_stop(ctx.nodes) {
                break;
            }

            let undo = board.apply(&mv);
            let score = -negamax(board, depth - 1, side.flip(), -INF, -alpha, &mut ctx);
            board.undo(&mv, undo);

            // A stop may have fired inside the subtree; its score is garbage.
            if control.should_stop(ctx.nodes) {
                break;
            }

            if score > best_score {
                best_score = score;
                best = Some(mv);
                if score > alpha {
                    alpha = score;
                }
            }
        }
    }

    let score = match best {
        Some(_) => best_score,
        None => evaluate(board, side),
    };

    debug!(%side, depth, nodes = ctx.nodes, score, "search finished");
    SearchOutcome {
        best,
        score,
        nodes: ctx.nodes,
        depth,
    }
}
