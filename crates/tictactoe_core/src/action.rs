//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A placed move and an ignored
//! click are both reported back to the caller as values.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a click left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of [`GameState::apply_move`](crate::GameState::apply_move).
///
/// Ignored moves are not errors: the state is unchanged and callers are
/// free to drop the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new snapshot.
    Placed(Move),
    /// The click was ignored.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Whether the move changed the history.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
