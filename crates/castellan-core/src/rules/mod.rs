//! The legality engine.
//!
//! A candidate move passes three gates: the piece-family gate (shape, path,
//! destination occupant, special rules), then the king-safety gate (apply
//! the move provisionally, ask the oracle, revert), then — for submitted
//! moves — the ownership gate. Enumeration order is fixed: squares are
//! scanned rank-major, so results are deterministic for a given position.

mod king;
mod knight;
mod pawn;
mod slider;

use crate::attack::in_check;
use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::moves::Move;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Classify `from -> to` for the given piece, ignoring king safety.
fn candidate(board: &Board, piece: &Piece, from: Square, to: Square) -> Option<Move> {
    if from == to {
        return None;
    }
    let kind = match piece.kind {
        PieceKind::Pawn => pawn::candidate(board, piece, from, to),
        PieceKind::Knight => knight::candidate(board, piece, from, to),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            slider::candidate(board, piece, from, to)
        }
        PieceKind::King => king::candidate(board, piece, from, to),
    }?;
    Some(Move::new(from, to, kind))
}

/// Return `true` if the move does not leave the mover's own king in check.
///
/// Applies the move to the scratch board, consults the oracle, and reverts;
/// the scratch board is back to its input state on return.
fn keeps_king_safe(scratch: &mut Board, mv: &Move, mover: Color) -> bool {
    let undo = scratch.apply(mv);
    let safe = !in_check(scratch, mover);
    scratch.undo(mv, undo);
    safe
}

/// Enumerate every legal move for the piece on `from`, in destination scan
/// order. Returns an empty list if the square is empty.
pub fn moves_from(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(from).copied() else {
        return Vec::new();
    };

    let mut scratch = board.clone();
    Square::all()
        .filter_map(|to| candidate(board, &piece, from, to))
        .filter(|mv| keeps_king_safe(&mut scratch, mv, piece.color))
        .collect()
}

/// The squares the piece on `from` may move to this ply, under all active
/// rules including king safety.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    moves_from(board, from).into_iter().map(|mv| mv.to).collect()
}

/// Every legal move for the given side, pieces in board-scan order and
/// destinations in scan order within each piece.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .into_iter()
        .flat_map(|(sq, _)| moves_from(board, sq))
        .collect()
}

/// Return `true` if the given side has at least one legal move.
///
/// Short-circuits on the first hit, which makes terminal-state detection
/// much cheaper than a full enumeration.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    let mut scratch = board.clone();
    for (from, piece) in board.pieces_of(color) {
        for to in Square::all() {
            if let Some(mv) = candidate(board, &piece, from, to)
                && keeps_king_safe(&mut scratch, &mv, color)
            {
                return true;
            }
        }
    }
    false
}

/// Validate and apply a caller-submitted move for `side`.
///
/// On success the board is updated and the classified move returned; on
/// rejection the board is left untouched.
pub fn submit_move(
    board: &mut Board,
    from: Square,
    to: Square,
    side: Color,
) -> Result<Move, MoveError> {
    let piece = board
        .piece_at(from)
        .ok_or(MoveError::EmptySource { square: from })?;
    if piece.color != side {
        return Err(MoveError::WrongColor { square: from });
    }

    let Some(mv) = moves_from(board, from).into_iter().find(|mv| mv.to == to) else {
        tracing::debug!(%from, %to, "rejected illegal move");
        return Err(MoveError::IllegalDestination { from, to });
    };

    board.apply(&mv);
    tracing::debug!(%mv, "applied move");
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::{legal_destinations, legal_moves, moves_from, submit_move};
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::moves::{Move, MoveKind};
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    fn place_new(board: &mut Board, sq: Square, kind: PieceKind, color: Color) {
        board.place(sq, Piece::new(kind, color));
    }

    fn place_moved(board: &mut Board, sq: Square, kind: PieceKind, color: Color) {
        let mut piece = Piece::new(kind, color);
        piece.has_moved = true;
        board.place(sq, piece);
    }

    #[test]
    fn starting_position_has_20_moves_per_side() {
        let board = Board::starting_position();
        assert_eq!(legal_moves(&board, Color::White).len(), 20);
        assert_eq!(legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::starting_position();
        assert!(moves_from(&board, Square::E4).is_empty());
    }

    #[test]
    fn pawn_start_destinations() {
        let board = Board::starting_position();
        let dests = legal_destinations(&board, Square::E2);
        assert_eq!(dests, vec![Square::E3, Square::E4]);
    }

    #[test]
    fn knight_jumps_over_pawns() {
        let board = Board::starting_position();
        let dests = legal_destinations(&board, Square::G1);
        assert_eq!(dests, vec![Square::F3, Square::H3]);
    }

    #[test]
    fn pinned_piece_cannot_move() {
        // White king e1, white knight e2, black rook e8: the knight is
        // pinned along the e-file.
        let mut board = Board::empty();
        place_new(&mut board, Square::E1, PieceKind::King, Color::White);
        place_new(&mut board, Square::E2, PieceKind::Knight, Color::White);
        place_new(&mut board, Square::E8, PieceKind::Rook, Color::Black);
        place_new(&mut board, Square::A8, PieceKind::King, Color::Black);
        assert!(legal_destinations(&board, Square::E2).is_empty());
    }

    #[test]
    fn must_resolve_check() {
        // White king e1 checked by a rook on e8; the bishop can only block
        // on the e-file or the king must step aside.
        let mut board = Board::empty();
        place_new(&mut board, Square::E1, PieceKind::King, Color::White);
        place_new(&mut board, Square::C3, PieceKind::Bishop, Color::White);
        place_new(&mut board, Square::E8, PieceKind::Rook, Color::Black);
        place_new(&mut board, Square::A8, PieceKind::King, Color::Black);

        let bishop_dests = legal_destinations(&board, Square::C3);
        assert_eq!(bishop_dests, vec![Square::E5]);
        for mv in legal_moves(&board, Color::White) {
            let mut scratch = board.clone();
            let undo = scratch.apply(&mv);
            assert!(!crate::attack::in_check(&scratch, Color::White));
            scratch.undo(&mv, undo);
        }
    }

    #[test]
    fn kings_never_capturable() {
        // Exhaustively play every legal move from a tactical position and
        // verify both kings survive.
        let mut board = Board::starting_position();
        let _ = board.apply(&Move::new(Square::E2, Square::E4, MoveKind::DoubleAdvance));
        let _ = board.apply(&Move::new(Square::F7, Square::F5, MoveKind::DoubleAdvance));
        for color in Color::ALL {
            for mv in legal_moves(&board, color) {
                let mut scratch = board.clone();
                let _ = scratch.apply(&mv);
                // king_square panics if a king is gone.
                let _ = scratch.king_square(Color::White);
                let _ = scratch.king_square(Color::Black);
            }
        }
    }

    #[test]
    fn en_passant_window_is_one_ply() {
        let mut board = Board::starting_position();
        let _ = board.apply(&Move::new(Square::E2, Square::E4, MoveKind::DoubleAdvance));
        let _ = board.apply(&Move::new(Square::A7, Square::A6, MoveKind::Normal));
        let _ = board.apply(&Move::new(Square::E4, Square::E5, MoveKind::Normal));
        let _ = board.apply(&Move::new(Square::D7, Square::D5, MoveKind::DoubleAdvance));

        // Immediately after d5, exd6 is available.
        let moves = moves_from(&board, Square::E5);
        assert!(
            moves.contains(&Move::new(Square::E5, Square::D6, MoveKind::EnPassant)),
            "en passant should be available the ply after the double advance"
        );

        // White plays something else; one ply later the window is closed.
        let _ = board.apply(&Move::new(Square::B1, Square::C3, MoveKind::Normal));
        let _ = board.apply(&Move::new(Square::H7, Square::H6, MoveKind::Normal));
        let moves = moves_from(&board, Square::E5);
        assert!(
            !moves.iter().any(|mv| mv.kind == MoveKind::EnPassant),
            "en passant must expire after one ply"
        );
    }

    #[test]
    fn en_passant_only_from_passing_rank() {
        // A white pawn on its own fourth rank cannot capture a black pawn
        // en passant; the geometry only works on rank 5.
        let mut board = Board::empty();
        place_new(&mut board, Square::E1, PieceKind::King, Color::White);
        place_new(&mut board, Square::E8, PieceKind::King, Color::Black);
        place_moved(&mut board, Square::E4, PieceKind::Pawn, Color::White);
        let mut victim = Piece::new(PieceKind::Pawn, Color::Black);
        victim.has_moved = true;
        victim.passant_vulnerable = true;
        board.place(Square::D4, victim);

        let moves = moves_from(&board, Square::E4);
        assert!(!moves.iter().any(|mv| mv.kind == MoveKind::EnPassant));
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        place_new(&mut board, Square::E1, PieceKind::King, Color::White);
        place_new(&mut board, Square::A1, PieceKind::Rook, Color::White);
        place_new(&mut board, Square::H1, PieceKind::Rook, Color::White);
        place_new(&mut board, Square::E8, PieceKind::King, Color::Black);
        board
    }

    #[test]
    fn castling_both_sides_available() {
        let board = castling_board();
        let moves = moves_from(&board, Square::E1);
        assert!(moves.contains(&Move::new(Square::E1, Square::G1, MoveKind::CastleKingside)));
        assert!(moves.contains(&Move::new(Square::E1, Square::C1, MoveKind::CastleQueenside)));
    }

    #[test]
    fn castling_blocked_by_intervening_piece() {
        let mut board = castling_board();
        place_new(&mut board, Square::B1, PieceKind::Knight, Color::White);
        let moves = moves_from(&board, Square::E1);
        assert!(!moves.iter().any(|mv| mv.kind == MoveKind::CastleQueenside));
        assert!(moves.iter().any(|mv| mv.kind == MoveKind::CastleKingside));
    }

    #[test]
    fn castling_denied_after_king_moved() {
        let mut board = castling_board();
        board.piece_at_mut(Square::E1).unwrap().has_moved = true;
        let moves = moves_from(&board, Square::E1);
        assert!(!moves.iter().any(|mv| mv.kind.is_castle()));
    }

    #[test]
    fn castling_denied_after_rook_moved() {
        let mut board = castling_board();
        board.piece_at_mut(Square::H1).unwrap().has_moved = true;
        let moves = moves_from(&board, Square::E1);
        assert!(!moves.iter().any(|mv| mv.kind == MoveKind::CastleKingside));
        assert!(moves.iter().any(|mv| mv.kind == MoveKind::CastleQueenside));
    }

    #[test]
    fn castling_denied_while_in_check() {
        let mut board = castling_board();
        place_new(&mut board, Square::E5, PieceKind::Rook, Color::Black);
        let moves = moves_from(&board, Square::E1);
        assert!(!moves.iter().any(|mv| mv.kind.is_castle()));
    }

    #[test]
    fn castling_denied_through_attacked_square() {
        // A bishop on a6 covers f1, the square the king crosses kingside.
        let mut board = castling_board();
        place_new(&mut board, Square::A6, PieceKind::Bishop, Color::Black);
        let moves = moves_from(&board, Square::E1);
        assert!(!moves.iter().any(|mv| mv.kind == MoveKind::CastleKingside));
    }

    #[test]
    fn castling_denied_onto_attacked_square() {
        // A rook on g8 covers g1, the kingside landing square.
        let mut board = castling_board();
        place_new(&mut board, Square::G8, PieceKind::Rook, Color::Black);
        let moves = moves_from(&board, Square::E1);
        assert!(!moves.iter().any(|mv| mv.kind == MoveKind::CastleKingside));
        assert!(moves.iter().any(|mv| mv.kind == MoveKind::CastleQueenside));
    }

    #[test]
    fn castling_allowed_when_only_rook_path_attacked() {
        // A rook on b8 covers b1, which only the rook crosses during
        // queenside castling; the king's path (e1, d1, c1) is safe.
        let mut board = castling_board();
        place_new(&mut board, Square::B8, PieceKind::Rook, Color::Black);
        let moves = moves_from(&board, Square::E1);
        assert!(moves.iter().any(|mv| mv.kind == MoveKind::CastleQueenside));
    }

    #[test]
    fn submit_move_applies_legal_move() {
        let mut board = Board::starting_position();
        let mv = submit_move(&mut board, Square::E2, Square::E4, Color::White).unwrap();
        assert_eq!(mv.kind, MoveKind::DoubleAdvance);
        assert!(board.piece_at(Square::E4).is_some());
        assert!(board.piece_at(Square::E2).is_none());
    }

    #[test]
    fn submit_move_rejections_leave_board_unchanged() {
        let mut board = Board::starting_position();
        let before = board.clone();

        assert_eq!(
            submit_move(&mut board, Square::E4, Square::E5, Color::White),
            Err(MoveError::EmptySource { square: Square::E4 })
        );
        assert_eq!(
            submit_move(&mut board, Square::E7, Square::E5, Color::White),
            Err(MoveError::WrongColor { square: Square::E7 })
        );
        assert_eq!(
            submit_move(&mut board, Square::E2, Square::E5, Color::White),
            Err(MoveError::IllegalDestination {
                from: Square::E2,
                to: Square::E5
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_offered_on_last_rank() {
        let mut board = Board::empty();
        place_new(&mut board, Square::E1, PieceKind::King, Color::White);
        place_new(&mut board, Square::H8, PieceKind::King, Color::Black);
        place_moved(&mut board, Square::A7, PieceKind::Pawn, Color::White);
        place_new(&mut board, Square::B8, PieceKind::Rook, Color::Black);

        let moves = moves_from(&board, Square::A7);
        assert!(moves.contains(&Move::new(Square::A7, Square::A8, MoveKind::Promotion)));
        assert!(moves.contains(&Move::new(Square::A7, Square::B8, MoveKind::Promotion)));
    }
}
