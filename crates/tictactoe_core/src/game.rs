//! Observable game owner.
//!
//! [`Game`] wraps a [`GameState`] and is the single entry point for the
//! three inbound calls. After each call it builds a fresh [`GameView`] and
//! hands it to every subscribed [`Observer`], in subscription order.

use super::action::MoveOutcome;
use super::observer::{GameEvent, Observer};
use super::state::GameState;
use super::view::GameView;
use super::{Order, Position};
use tracing::instrument;

/// A game plus the observers that watch it.
pub struct Game {
    state: GameState,
    observers: Vec<Box<dyn Observer>>,
}

impl Game {
    /// Creates a fresh game with no observers.
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Wraps an existing state.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// Adds an observer; it sees every later call.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The wrapped state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// A fresh projection of the current state.
    pub fn view(&self) -> GameView {
        GameView::new(&self.state)
    }

    /// Clicks a square. See [`GameState::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let outcome = self.state.apply_move(pos);
        let event = match outcome {
            MoveOutcome::Placed(mov) => GameEvent::MovePlaced(mov),
            MoveOutcome::Ignored(rejection) => GameEvent::MoveIgnored(rejection),
        };
        self.publish(event);
        outcome
    }

    /// Views a step. See [`GameState::view_step`].
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an index into history.
    #[instrument(skip(self))]
    pub fn view_step(&mut self, step: usize) {
        self.state.view_step(step);
        self.publish(GameEvent::StepViewed(step));
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> Order {
        let order = self.state.toggle_order();
        self.publish(GameEvent::OrderToggled(order));
        order
    }

    fn publish(&mut self, event: GameEvent) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        for observer in &mut self.observers {
            observer.notify(&event, &view);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
