//! Terminal front end and headless replay for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with CLI overrides
//! - **TUI**: ratatui board, status line and move list over a
//!   [`tictactoe_core::Game`]
//! - **Replay**: plays cell indices and returns the final
//!   [`tictactoe_core::GameView`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use replay::run_replay;
pub use tui::{App, run_tui};
