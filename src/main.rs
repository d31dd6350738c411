use anyhow::Result;
use castellan_core::{Board, Color, terminal};
use castellan_engine::{SearchControl, best_move};
use tracing::info;

const SEARCH_DEPTH: u32 = 3;
const MAX_PLIES: u32 = 20;

/// Self-play demo: both sides pick moves with the same fixed-depth search.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("castellan starting");

    let mut board = Board::starting_position();
    let mut side = Color::White;
    let control = SearchControl::infinite();

    for ply in 0..MAX_PLIES {
        if terminal(&board, side) {
            info!(%side, ply, "game over");
            break;
        }

        let outcome = best_move(&mut board, SEARCH_DEPTH, side, &control);
        let Some(mv) = outcome.best else {
            break;
        };
        info!(%side, %mv, score = outcome.score, nodes = outcome.nodes, "playing");
        board.apply(&mv);
        side = side.flip();
    }

    println!("{}", board.pretty());
    Ok(())
}
