//! Error types for board validation and move submission.

use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::board::Board).
///
/// These indicate a higher-layer bug, not an illegal move; callers should
/// treat them as fatal rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// More than one pawn is flagged as capturable en passant.
    ///
    /// The flag lives for a single ply, so at most one pawn on the whole
    /// board can carry it.
    #[error("{count} pawns flagged en-passant-vulnerable, expected at most 1")]
    MultiplePassantPawns {
        /// Number of flagged pawns found.
        count: usize,
    },
    /// An empty cell carries the wrong light/dark shade for its square.
    #[error("empty cell at {square} has the wrong shade")]
    WrongShade {
        /// The mis-shaded square.
        square: Square,
    },
}

/// Rejection reasons for a submitted move.
///
/// All of these are recoverable, expected gameplay outcomes; the board is
/// left unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The source square holds no piece.
    #[error("no piece on {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
    /// The source square holds a piece of the wrong color.
    #[error("piece on {square} does not belong to the moving side")]
    WrongColor {
        /// The contested source square.
        square: Square,
    },
    /// The destination is not a legal destination for the piece.
    #[error("{from}{to} is not a legal move")]
    IllegalDestination {
        /// Source square.
        from: Square,
        /// Requested destination.
        to: Square,
    },
}
