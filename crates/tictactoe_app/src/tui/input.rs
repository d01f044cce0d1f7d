//! Key bindings and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tictactoe_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor (arrow keys).
    Cursor(KeyCode),
    /// Place a mark under the cursor.
    Place,
    /// View the previous step.
    EarlierStep,
    /// View the next step.
    LaterStep,
    /// View the game start.
    FirstStep,
    /// View the newest step.
    LastStep,
    /// Flip the move list order.
    ToggleOrder,
    /// Start over.
    NewGame,
    /// Leave the app.
    Quit,
}

/// Maps a key press to an action. Releases and repeats are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::Cursor(code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place),
        KeyCode::Char('k') | KeyCode::PageUp => Some(Action::EarlierStep),
        KeyCode::Char('j') | KeyCode::PageDown => Some(Action::LaterStep),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstStep),
        KeyCode::Char('G') | KeyCode::End => Some(Action::LastStep),
        KeyCode::Char('s') => Some(Action::ToggleOrder),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::at(r, c))
        .unwrap_or(cursor)
}
