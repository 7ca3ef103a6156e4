// Tic-tac-toe in the terminal with ratatui
// Controls: click a tile or press 1-9 to place a mark, R to restart, Q to quit.

mod console_interface;
mod core;
mod models;
#[cfg(test)]
mod tests;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{
    HitAreas, cleanup_terminal, handle_input, render_board_to_string, render_game, setup_terminal,
};
use crate::core::UserAction::{PlaceMark, Restart};
use crate::core::{GameChange, GameUpdate, apply_move, new_game};
use crate::models::GameRenderState;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut terminal = setup_terminal()?;
    let run_result = run_interactive(&mut terminal);
    cleanup_terminal()?;
    run_result
}

// The alternate screen owns stdout, so logs go to a file instead. Filter with
// RUST_LOG, e.g. RUST_LOG=debug.
fn init_logging() {
    let Ok(log_file) = std::fs::File::create("tictactoe.log") else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .try_init();
}

fn run_interactive(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = new_game();
    let mut last_change: Option<GameChange> = None;
    let mut hit_areas = HitAreas::default();

    // Initial render
    render_game(terminal, &GameRenderState { game, last_change }, &mut hit_areas)?;

    loop {
        let action = match handle_input()? {
            Quit => break,
            UserAction(action) => Some(action),
            Click { column, row } => hit_areas.hit_test(column, row),
            Resize => {
                render_game(terminal, &GameRenderState { game, last_change }, &mut hit_areas)?;
                None
            }
            Timeout | Unknown => None,
        };
        let Some(action) = action else {
            continue;
        };

        match action {
            PlaceMark(index) => match apply_move(&game, index) {
                GameUpdate::NextState(next_state, change) => {
                    game = next_state;
                    last_change = Some(change);
                    tracing::debug!(
                        index,
                        mark = %change.mark,
                        status = ?change.status,
                        "move applied\n{}",
                        render_board_to_string(&game)
                    );
                    render_game(terminal, &GameRenderState { game, last_change }, &mut hit_areas)?;
                }
                GameUpdate::Rejected(reason) => {
                    // Stale activations against occupied tiles or a finished
                    // game are absorbed without a redraw
                    tracing::debug!(index, ?reason, "move rejected");
                }
            },
            Restart => {
                game = new_game();
                last_change = None;
                tracing::debug!("game restarted");
                render_game(terminal, &GameRenderState { game, last_change }, &mut hit_areas)?;
            }
        }
    }

    Ok(())
}
