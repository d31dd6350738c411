//! Material and positional scoring for one side.

use castellan_core::{Board, Color};

use super::pst;

/// Sum of material values plus piece-square bonuses for every piece of the
/// given color.
pub(crate) fn material_and_position(board: &Board, color: Color) -> i32 {
    board
        .pieces_of(color)
        .into_iter()
        .map(|(sq, piece)| piece.kind.material_value() + pst::bonus(piece.kind, color, sq))
        .sum()
}
