//! Single mark delta invariant: each step adds exactly one mark.

use super::super::{GameState, Position, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: consecutive boards differ in exactly one square.
///
/// That square is empty before the step, occupied after it, and is the
/// position recorded as the step's move.
pub struct SingleMarkDeltaInvariant;

impl Invariant<GameState> for SingleMarkDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().snapshots().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::iter()
                .filter(|pos| before.get(*pos) != after.get(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    before.get(*pos) == Square::Empty
                        && after.get(*pos) != Square::Empty
                        && pair[1].last_move() == Some(*pos)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark to an empty square"
    }
}
