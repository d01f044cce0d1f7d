//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark placed at step `i` belongs to the player whose turn
/// it was at step `i - 1`.
///
/// X places on odd steps, O on even ones, so "X is next" always equals
/// "the viewed step is even".
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| match snapshot.last_move() {
                Some(pos) => snapshot.board().get(pos) == Square::Occupied(Player::for_step(step - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
