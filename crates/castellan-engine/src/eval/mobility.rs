//! Mobility: how many legal destinations a side's pieces have.

use castellan_core::{Board, Color, rules};

/// Total count of legal destinations across all pieces of the given color.
///
/// Counted after the king-safety filter, so moves that would leave the
/// king in check contribute nothing.
pub(crate) fn mobility(board: &Board, color: Color) -> i32 {
    board
        .pieces_of(color)
        .into_iter()
        .map(|(sq, _)| rules::legal_destinations(board, sq).len() as i32)
        .sum()
}
