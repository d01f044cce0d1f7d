//! Change notifications for presentation layers.

use super::action::{Move, Rejection};
use super::view::GameView;
use super::Order;
use serde::Serialize;
use tracing::{debug, info};

/// What an inbound call did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum GameEvent {
    /// A mark was placed and became the viewed step.
    #[display("placed {}", _0)]
    MovePlaced(Move),
    /// A click was ignored; nothing changed.
    #[display("ignored: {}", _0)]
    MoveIgnored(Rejection),
    /// The viewed step moved.
    #[display("viewing step {}", _0)]
    StepViewed(usize),
    /// The move list order flipped.
    #[display("order now {}", _0)]
    OrderToggled(Order),
}

/// Receives a fresh [`GameView`] after every inbound call on a
/// [`Game`](crate::Game).
pub trait Observer {
    /// Called once per inbound call, after the state has changed.
    fn notify(&mut self, event: &GameEvent, view: &GameView);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent, &GameView),
{
    fn notify(&mut self, event: &GameEvent, view: &GameView) {
        self(event, view)
    }
}

/// Logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(&mut self, event: &GameEvent, view: &GameView) {
        match event {
            GameEvent::MoveIgnored(_) => debug!(%event, step = view.step(), "Game event"),
            _ => info!(
                %event,
                step = view.step(),
                history_len = view.history_len(),
                status = %view.status_line(),
                "Game event"
            ),
        }
    }
}
