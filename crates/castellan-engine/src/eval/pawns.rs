//! Pawn-structure penalties: doubled and blocked pawns.

use castellan_core::{Board, Color, PieceKind, rules};

/// Number of pawns of the given color that share a file with at least one
/// other friendly pawn. Three pawns on one file count as three.
pub(crate) fn doubled_count(board: &Board, color: Color) -> i32 {
    let mut per_file = [0i32; 8];
    for (sq, piece) in board.pieces_of(color) {
        if piece.kind == PieceKind::Pawn {
            per_file[sq.file() as usize] += 1;
        }
    }
    per_file.iter().filter(|&&n| n >= 2).sum()
}

/// Number of pawns of the given color with no legal destination at all.
pub(crate) fn blocked_count(board: &Board, color: Color) -> i32 {
    board
        .pieces_of(color)
        .into_iter()
        .filter(|(sq, piece)| {
            piece.kind == PieceKind::Pawn && rules::legal_destinations(board, *sq).is_empty()
        })
        .count() as i32
}

#[cfg(test)]
mod tests {
    use super::{blocked_count, doubled_count};
    use castellan_core::{Board, Color, Piece, PieceKind, Square};

    fn with_kings() -> Board {
        let mut board = Board::empty();
        board.place(Square::A1, Piece::new(PieceKind::King, Color::White));
        board.place(Square::H8, Piece::new(PieceKind::King, Color::Black));
        board
    }

    #[test]
    fn starting_position_has_no_penalties() {
        let board = Board::starting_position();
        assert_eq!(doubled_count(&board, Color::White), 0);
        assert_eq!(doubled_count(&board, Color::Black), 0);
        assert_eq!(blocked_count(&board, Color::White), 0);
        assert_eq!(blocked_count(&board, Color::Black), 0);
    }

    #[test]
    fn both_pawns_on_a_shared_file_count() {
        let mut board = with_kings();
        board.place(Square::E3, Piece::new(PieceKind::Pawn, Color::White));
        board.place(Square::E5, Piece::new(PieceKind::Pawn, Color::White));
        board.place(Square::C4, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(doubled_count(&board, Color::White), 2);
    }

    #[test]
    fn head_to_head_pawns_are_blocked() {
        let mut board = with_kings();
        board.place(Square::E4, Piece::new(PieceKind::Pawn, Color::White));
        board.place(Square::E5, Piece::new(PieceKind::Pawn, Color::Black));
        assert_eq!(blocked_count(&board, Color::White), 1);
        assert_eq!(blocked_count(&board, Color::Black), 1);
    }

    #[test]
    fn blocked_pawn_with_a_capture_is_not_blocked() {
        let mut board = with_kings();
        board.place(Square::E4, Piece::new(PieceKind::Pawn, Color::White));
        board.place(Square::E5, Piece::new(PieceKind::Pawn, Color::Black));
        board.place(Square::D5, Piece::new(PieceKind::Knight, Color::Black));
        assert_eq!(blocked_count(&board, Color::White), 0);
    }
}
