//! Read-only projections of a [`GameState`] for presentation.
//!
//! A [`GameView`] is a detached value: it owns copies of everything a front
//! end needs to draw the board, status line and move list, so it can be kept
//! or serialized after the state moves on.

use super::rules::Win;
use super::state::{GameState, GameStatus};
use super::{Board, Order, Player, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Square played to reach the step (`None` for the game start).
    position: Option<Position>,
    /// One-based `(row, col)` of `position`.
    coordinates: Option<(usize, usize)>,
    /// Player who made the move.
    player: Option<Player>,
    /// Button text, e.g. `Go to move #3 (row 1, col 2)`.
    label: String,
    /// Whether this is the viewed step.
    is_current: bool,
}

impl MoveEntry {
    fn new(state: &GameState, step: usize) -> Self {
        let snapshot = &state.history()[step];
        let position = snapshot.last_move();
        let coordinates = snapshot.move_coordinates();
        let label = match coordinates {
            Some((row, col)) => format!("Go to move #{} (row {}, col {})", step, row, col),
            None => "Go to game start".to_string(),
        };

        Self {
            step,
            position,
            coordinates,
            player: position.and_then(|pos| snapshot.board().get(pos).player()),
            label,
            is_current: step == state.step(),
        }
    }
}

/// Immutable snapshot of everything the presentation layer polls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Board at the viewed step.
    board: Board,
    /// Winner of the viewed board and the line to highlight.
    winner: Option<Win>,
    /// Status of the viewed board.
    status: GameStatus,
    /// Player who moves next.
    next_player: Player,
    /// Whether X moves next.
    x_is_next: bool,
    /// Viewed step.
    step: usize,
    /// Number of snapshots in history.
    history_len: usize,
    /// Move list display order.
    order: Order,
    /// Move list, already in display order.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Projects `state` into a fresh view.
    #[instrument(skip(state), fields(step = state.step()))]
    pub fn new(state: &GameState) -> Self {
        let mut moves: Vec<MoveEntry> = (0..state.history().len())
            .map(|step| MoveEntry::new(state, step))
            .collect();
        if state.order() == Order::Descending {
            moves.reverse();
        }

        Self {
            board: *state.current_board(),
            winner: state.current_winner(),
            status: state.status(),
            next_player: state.next_player(),
            x_is_next: state.x_is_next(),
            step: state.step(),
            history_len: state.history().len(),
            order: state.order(),
            moves,
        }
    }

    /// Status line text.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::Won(win) => format!("Winner: {}", win.player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player),
        }
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winner.is_some_and(|win| win.contains(pos))
    }
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        Self::new(state)
    }
}
