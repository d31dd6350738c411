//! Reversible move execution: make/unmake on a single board.
//!
//! Search explores the game tree by mutating one board in place, so
//! `undo(apply(board, m)) == board` must hold structurally for every legal
//! move — captured pieces, moved-flags, and en passant flags included. The
//! [`Undo`] token captures exactly what `apply` destroyed.

use crate::board::Board;
use crate::moves::{Move, MoveKind};
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Opaque record of everything an `apply` call needs reverted.
#[derive(Debug, Clone, Copy)]
pub struct Undo {
    /// The moving piece exactly as it stood on the source square.
    mover: Piece,
    /// A captured piece and the square it stood on (en passant victims do
    /// not stand on the move's destination).
    captured: Option<(Square, Piece)>,
    /// Square of a same-color pawn whose en passant window this move closed.
    passant_cleared: Option<Square>,
}

impl Board {
    /// Apply a move in place and return the token that reverts it.
    ///
    /// The move must have come from the legality engine; `apply` performs no
    /// validation of its own.
    ///
    /// # Panics
    ///
    /// Panics if the source square is empty — callers only hand legal moves
    /// to `apply`, so an empty source is an invariant violation.
    pub fn apply(&mut self, mv: &Move) -> Undo {
        let mover = *self
            .piece_at(mv.from)
            .expect("apply: source square is empty");
        let us = mover.color;

        // The one-ply en passant window on our own pawn (opened two plies
        // ago) closes as soon as we move again.
        let mut passant_cleared = None;
        for sq in Square::all() {
            if let Some(piece) = self.piece_at_mut(sq)
                && piece.color == us
                && piece.passant_vulnerable
            {
                piece.passant_vulnerable = false;
                passant_cleared = Some(sq);
            }
        }

        let moved = Piece {
            has_moved: true,
            passant_vulnerable: false,
            ..mover
        };

        let mut captured = None;
        match mv.kind {
            MoveKind::Normal | MoveKind::Capture => {
                if let Some(victim) = self.piece_at(mv.to) {
                    captured = Some((mv.to, *victim));
                }
                self.clear(mv.from);
                self.place(mv.to, moved);
            }

            MoveKind::DoubleAdvance => {
                self.clear(mv.from);
                self.place(
                    mv.to,
                    Piece {
                        passant_vulnerable: true,
                        ..moved
                    },
                );
            }

            MoveKind::EnPassant => {
                // The victim stands beside the source, on the destination file.
                let victim_sq = Square::new(mv.from.rank(), mv.to.file());
                let victim = *self
                    .piece_at(victim_sq)
                    .expect("apply: en passant victim is missing");
                captured = Some((victim_sq, victim));
                self.clear(victim_sq);
                self.clear(mv.from);
                self.place(mv.to, moved);
            }

            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let rank = mv.from.rank();
                let (rook_from, rook_to) = if mv.kind == MoveKind::CastleKingside {
                    (Square::new(rank, 7), Square::new(rank, 5))
                } else {
                    (Square::new(rank, 0), Square::new(rank, 3))
                };
                let rook = *self
                    .piece_at(rook_from)
                    .expect("apply: castling rook is missing");
                self.clear(mv.from);
                self.clear(rook_from);
                self.place(mv.to, moved);
                self.place(
                    rook_to,
                    Piece {
                        has_moved: true,
                        ..rook
                    },
                );
            }

            MoveKind::Promotion => {
                if let Some(victim) = self.piece_at(mv.to) {
                    captured = Some((mv.to, *victim));
                }
                self.clear(mv.from);
                // The pawn is logically replaced by a new queen.
                self.place(
                    mv.to,
                    Piece {
                        kind: PieceKind::Queen,
                        ..moved
                    },
                );
            }
        }

        Undo {
            mover,
            captured,
            passant_cleared,
        }
    }

    /// Revert a move previously applied with [`Board::apply`].
    ///
    /// Must be called with the same move and in strictly nested order
    /// (innermost apply undone first).
    pub fn undo(&mut self, mv: &Move, undo: Undo) {
        match mv.kind {
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let rank = mv.from.rank();
                let (rook_from, rook_to) = if mv.kind == MoveKind::CastleKingside {
                    (Square::new(rank, 7), Square::new(rank, 5))
                } else {
                    (Square::new(rank, 0), Square::new(rank, 3))
                };
                let rook = *self
                    .piece_at(rook_to)
                    .expect("undo: castling rook is missing");
                self.clear(mv.to);
                self.clear(rook_to);
                self.place(mv.from, undo.mover);
                // The rook was necessarily unmoved for castling to be legal.
                self.place(
                    rook_from,
                    Piece {
                        has_moved: false,
                        ..rook
                    },
                );
            }
            _ => {
                self.clear(mv.to);
                self.place(mv.from, undo.mover);
            }
        }

        if let Some((sq, victim)) = undo.captured {
            self.place(sq, victim);
        }

        if let Some(sq) = undo.passant_cleared
            && let Some(piece) = self.piece_at_mut(sq)
        {
            piece.passant_vulnerable = true;
        }
    }
}
