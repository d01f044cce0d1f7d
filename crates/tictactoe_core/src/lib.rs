//! Tic-tac-toe with move history and time travel.
//!
//! The crate is pure game logic: no I/O, no threads.
//!
//! # Architecture
//!
//! - **Rules**: [`check_winner`] scans the eight fixed lines of a [`Board`].
//! - **History**: an append-only log of [`Snapshot`]s with a viewed-step
//!   pointer, managed by [`GameState`].
//! - **Views**: [`GameView`] projections, pushed to [`Observer`]s by [`Game`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Player, Position};
//!
//! let mut state = GameState::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     state.apply_move(pos);
//! }
//! state.view_step(1);
//! assert_eq!(state.next_player(), Player::O);
//! assert_eq!(state.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod snapshot;
mod state;
mod types;
mod view;

pub use action::{Move, MoveOutcome, Rejection};
pub use game::Game;
pub use history::History;
pub use observer::{GameEvent, Observer, TracingObserver};
pub use position::{Position, PositionError};
pub use rules::{WINNING_LINES, Win, check_winner, is_draw, is_full};
pub use snapshot::Snapshot;
pub use state::{GameState, GameStatus};
pub use types::{Board, Order, Player, Square};
pub use view::{GameView, MoveEntry};
