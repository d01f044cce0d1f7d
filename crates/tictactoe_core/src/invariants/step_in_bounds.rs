//! Step bounds invariant: the viewed step indexes into history.

use super::super::GameState;
use super::Invariant;

/// Invariant: the current step is a valid history index.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.step() < state.history().len()
    }

    fn description() -> &'static str {
        "Viewed step lies within history"
    }
}
