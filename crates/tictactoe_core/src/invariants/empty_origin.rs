//! Empty origin invariant: step 0 is the blank board.

use super::super::{GameState, Snapshot};
use super::Invariant;

/// Invariant: the first snapshot is the all-empty board with no move.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().get(0) == Some(&Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
