//! The mailbox board: an 8x8 grid of cells.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// The rendering shade of an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// The fixed shade of a square, determined by coordinate parity.
    ///
    /// a1 is a dark square, so even `rank + file` means dark.
    #[inline]
    pub const fn of(sq: Square) -> Shade {
        if (sq.rank() + sq.file()) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }
}

/// One square's worth of board state.
///
/// Empty cells remember their shade so the rendering layer never has to
/// recompute it; the board recomputes the correct shade on every vacate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty(Shade),
    Occupied(Piece),
}

impl Cell {
    /// Return `true` if no piece occupies this cell.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty(_))
    }

    /// Return the occupying piece, if any.
    #[inline]
    pub const fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty(_) => None,
        }
    }
}

/// An 8x8 chess board. The sole source of truth for what pieces exist.
///
/// Indexed rank-major: `cells[rank][file]`. Invariant during normal play:
/// exactly one king per color, guaranteed transitively by the legality
/// rules (kings are never capturable).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Return a board with no pieces on it.
    pub fn empty() -> Board {
        let mut cells = [[Cell::Empty(Shade::Dark); 8]; 8];
        for sq in Square::all() {
            cells[sq.rank() as usize][sq.file() as usize] = Cell::Empty(Shade::of(sq));
        }
        Board { cells }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        use PieceKind::*;

        let mut board = Board::empty();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for color in Color::ALL {
            let home = color.home_rank();
            let pawn_rank = (home as i8 + color.pawn_direction()) as u8;
            for (file, &kind) in back_rank.iter().enumerate() {
                board.place(Square::new(home, file as u8), Piece::new(kind, color));
                board.place(Square::new(pawn_rank, file as u8), Piece::new(Pawn, color));
            }
        }

        board
    }

    /// Return the cell at the given square.
    #[inline]
    pub fn cell_at(&self, sq: Square) -> &Cell {
        &self.cells[sq.rank() as usize][sq.file() as usize]
    }

    /// Return the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.cell_at(sq).piece()
    }

    /// Return a mutable reference to the piece at the given square, if any.
    #[inline]
    pub(crate) fn piece_at_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        match &mut self.cells[sq.rank() as usize][sq.file() as usize] {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty(_) => None,
        }
    }

    /// Place a piece on the given square, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.rank() as usize][sq.file() as usize] = Cell::Occupied(piece);
    }

    /// Vacate the given square, restoring the shade dictated by its parity.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.rank() as usize][sq.file() as usize] = Cell::Empty(Shade::of(sq));
    }

    /// Iterate over every square and its cell in board-scan order.
    pub fn cells(&self) -> impl Iterator<Item = (Square, &Cell)> {
        Square::all().map(|sq| (sq, self.cell_at(sq)))
    }

    /// Return every piece of the given color with its square, in board-scan
    /// order (rank-major, then file).
    pub fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        self.cells()
            .filter_map(|(sq, cell)| match cell.piece() {
                Some(piece) if piece.color == color => Some((sq, *piece)),
                _ => None,
            })
            .collect()
    }

    /// Return the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Return the square of the king for the given side.
    ///
    /// # Panics
    ///
    /// Panics if no king of that color is on the board. A missing king is an
    /// invariant violation, not a gameplay state.
    pub fn king_square(&self, color: Color) -> Square {
        self.cells()
            .find_map(|(sq, cell)| match cell.piece() {
                Some(piece) if piece.kind == PieceKind::King && piece.color == color => Some(sq),
                _ => None,
            })
            .expect("board must have a king for each side")
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .iter()
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if count != 1 {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount {
                    color: color_name,
                    count,
                });
            }
        }

        let flagged = self
            .cells()
            .filter(|(_, cell)| cell.piece().is_some_and(|p| p.passant_vulnerable))
            .count();
        if flagged > 1 {
            return Err(BoardError::MultiplePassantPawns { count: flagged });
        }

        for (sq, cell) in self.cells() {
            if let Cell::Empty(shade) = cell
                && *shade != Shade::of(sq)
            {
                return Err(BoardError::WrongShade { square: sq });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({} pieces)", self.occupied_count())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let sq = Square::new(rank, file);
                match self.0.piece_at(sq) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
