//! Game state manager with time travel.
//!
//! [`GameState`] owns the snapshot [`History`], the viewed step, and the
//! move list display order. Everything else (current board, winner, whose
//! turn it is) is derived from those three.

use super::action::{Move, MoveOutcome, Rejection};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{Win, check_winner, is_full};
use super::{Board, History, Order, Player, Position, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether further moves are rejected.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Tic-tac-toe game state: history, viewed step and display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step: usize,
    order: Order,
}

impl GameState {
    /// Creates a new game showing the move list newest first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(Order::default())
    }

    /// Creates a new game with the given move list order.
    #[instrument]
    pub fn with_order(order: Order) -> Self {
        Self {
            history: History::new(),
            step: 0,
            order,
        }
    }

    /// Builds a game by clicking `positions` in order.
    ///
    /// Clicks that would be ignored in play are ignored here as well.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut state = Self::new();
        for pos in positions {
            state.apply_move(pos);
        }
        state
    }

    /// Places the next player's mark at `pos` on the viewed board.
    ///
    /// Ignored (state untouched) when the square is occupied or the viewed
    /// board is already decided. Otherwise every step after the viewed one
    /// is discarded, the new snapshot is appended and becomes the viewed
    /// step.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        if let Some(rejection) = self.rejection(pos) {
            debug!(%rejection, "Ignoring move");
            return MoveOutcome::Ignored(rejection);
        }

        let player = self.next_player();
        let next = self.current().advance(pos, player);
        self.history.truncate_after(self.step);
        self.step = self.history.push(next);
        debug!(new_step = self.step, "Move placed");

        self.debug_assert_invariants();
        MoveOutcome::Placed(Move::new(player, pos))
    }

    /// Views an earlier (or later) step without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an index into history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn view_step(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "step {} out of range for history of length {}",
            step,
            self.history.len()
        );
        self.step = step;
        debug!(next = %self.next_player(), "Viewing step");
    }

    /// Flips the move list display order.
    #[instrument(skip(self), fields(from = %self.order))]
    pub fn toggle_order(&mut self) -> Order {
        self.order = self.order.toggled();
        self.order
    }

    /// The full snapshot log.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the viewed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Move list display order.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Snapshot at the viewed step.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Board at the viewed step.
    pub fn current_board(&self) -> &Board {
        self.current().board()
    }

    /// Winner of the viewed board, with the winning line.
    pub fn current_winner(&self) -> Option<Win> {
        check_winner(self.current_board())
    }

    /// Status of the viewed board.
    pub fn status(&self) -> GameStatus {
        match self.current_winner() {
            Some(win) => GameStatus::Won(win),
            None if is_full(self.current_board()) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Player who moves next, from the parity of the viewed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.next_player() == Player::X
    }

    fn rejection(&self, pos: Position) -> Option<Rejection> {
        let board = self.current_board();
        if check_winner(board).is_some() || is_full(board) {
            Some(Rejection::GameOver)
        } else if !board.is_empty(pos) {
            Some(Rejection::SquareOccupied(pos))
        } else {
            None
        }
    }

    fn debug_assert_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = HistoryInvariants::check_all(self) {
                panic!("history invariants violated: {:?}", violations);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_first_move_is_x() {
        let mut state = GameState::new();
        let outcome = state.apply_move(Position::Center);
        assert_eq!(outcome, MoveOutcome::Placed(Move::new(Player::X, Position::Center)));
        assert_eq!(state.step(), 1);
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut state = GameState::replay([Position::Center]);
        let outcome = state.apply_move(Position::Center);
        assert_eq!(outcome, MoveOutcome::Ignored(Rejection::SquareOccupied(Position::Center)));
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step(), 1);
    }

    #[test]
    fn test_won_board_rejects_moves() {
        let mut state = GameState::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]);
        assert!(matches!(state.status(), GameStatus::Won(win) if win.player == Player::X));
        assert_eq!(state.apply_move(Position::BottomRight), MoveOutcome::Ignored(Rejection::GameOver));
        assert_eq!(state.history().len(), 6);
    }

    #[test]
    fn test_viewing_won_step_back_allows_branch() {
        let mut state = GameState::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]);
        state.view_step(4);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.apply_move(Position::BottomRight).is_placed());
        assert_eq!(state.history().len(), 6);
        assert_eq!(state.current_board().get(Position::TopRight), Square::Empty);
    }

    #[test]
    fn test_draw_status() {
        // X O X / X O O / O X X
        let state = GameState::replay([
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(state.status().is_over());
    }

    #[test]
    fn test_toggle_order_round_trip() {
        let mut state = GameState::new();
        assert_eq!(state.toggle_order(), Order::Ascending);
        assert_eq!(state.toggle_order(), Order::Descending);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_view_step_out_of_range_panics() {
        let mut state = GameState::new();
        state.view_step(1);
    }
}
