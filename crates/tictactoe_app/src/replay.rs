//! Headless replay of a list of clicks.

use anyhow::{Context, Result, bail};
use tictactoe_core::{Game, GameState, GameView, Order, Position, TracingObserver};
use tracing::{info, instrument, warn};

/// Clicks `cells` in order, then views `step` (latest if `None`).
///
/// Cell indices and the step come from the user, so they are checked here
/// before they reach the game.
#[instrument]
pub fn run_replay(cells: &[usize], step: Option<usize>, order: Order) -> Result<GameView> {
    let positions = cells
        .iter()
        .enumerate()
        .map(|(n, cell)| {
            Position::try_from(*cell).with_context(|| format!("Invalid cell at argument {}", n + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut game = Game::from_state(GameState::with_order(order));
    game.subscribe(TracingObserver);

    for pos in positions {
        if !game.apply_move(pos).is_placed() {
            warn!(%pos, "Click ignored during replay");
        }
    }

    if let Some(step) = step {
        let len = game.state().history().len();
        if step >= len {
            bail!("Step {} out of range: history has {} steps (0-{})", step, len, len - 1);
        }
        game.view_step(step);
    }

    let view = game.view();
    info!(status = %view.status_line(), "Replay finished");
    Ok(view)
}
