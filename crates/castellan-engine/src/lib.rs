//! Search and evaluation for castellan.

pub mod eval;
pub mod search;

pub use eval::{INF, MATE, evaluate};
pub use search::control::SearchControl;
pub use search::{SearchOutcome, best_move};
