//! Core chess types: the mailbox board, move legality, king safety, and
//! terminal-state detection.

mod attack;
mod board;
mod color;
mod error;
mod make_move;
mod moves;
mod perft;
mod piece;
pub mod rules;
mod square;
mod status;

pub use attack::{in_check, is_square_attacked};
pub use board::{Board, Cell, PrettyBoard, Shade};
pub use color::Color;
pub use error::{BoardError, MoveError};
pub use make_move::Undo;
pub use moves::{Move, MoveKind};
pub use perft::perft;
pub use piece::{Piece, PieceKind};
pub use rules::{has_any_move, legal_destinations, legal_moves, moves_from, submit_move};
pub use square::Square;
pub use status::{checkmate, stalemate, terminal};
