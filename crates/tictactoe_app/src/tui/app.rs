//! Application state and logic.

use super::input::{Action, action_for, move_cursor};
use crate::config::AppConfig;
use crossterm::event::KeyEvent;
use tictactoe_core::{Game, GameState, GameView, MoveOutcome, Order, Position, TracingObserver};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    show_coordinates: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: new_game(config.order()),
            cursor: Position::Center,
            show_coordinates: *config.show_coordinates(),
            message: None,
            should_quit: false,
        }
    }

    /// A fresh view of the game.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether move labels show `(row, col)`.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Feedback from the last key press, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(key) {
            self.apply(action);
        }
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        self.message = None;
        let state = self.game.state();
        let last_step = state.history().len() - 1;
        let step = state.step();

        match action {
            Action::Cursor(code) => self.cursor = move_cursor(self.cursor, code),
            Action::Place => {
                if let MoveOutcome::Ignored(rejection) = self.game.apply_move(self.cursor) {
                    self.message = Some(rejection.to_string());
                }
            }
            Action::EarlierStep if step > 0 => self.game.view_step(step - 1),
            Action::LaterStep if step < last_step => self.game.view_step(step + 1),
            Action::EarlierStep | Action::LaterStep => {}
            Action::FirstStep => self.game.view_step(0),
            Action::LastStep => self.game.view_step(last_step),
            Action::ToggleOrder => {
                self.game.toggle_order();
            }
            Action::NewGame => {
                debug!("Restarting game");
                self.game = new_game(self.game.state().order());
                self.message = Some("New game".to_string());
            }
            Action::Quit => self.should_quit = true,
        }
    }
}

fn new_game(order: Order) -> Game {
    let mut game = Game::from_state(GameState::with_order(order));
    game.subscribe(TracingObserver);
    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tictactoe_core::{GameStatus, Player};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        let view = app.view();
        assert_eq!(*view.history_len(), 3);
        assert_eq!(view.board().get(Position::Center).player(), Some(Player::X));
        assert_eq!(view.board().get(Position::TopCenter).player(), Some(Player::O));
    }

    #[test]
    fn test_occupied_square_sets_message() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(*app.view().history_len(), 2);
        assert!(app.message().is_some_and(|m| m.contains("occupied")));
    }

    #[test]
    fn test_step_navigation_clamps() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(*app.view().step(), 0);

        press(&mut app, KeyCode::Char('G'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(*app.view().step(), 1);
    }

    #[test]
    fn test_new_game_keeps_order() {
        let config = AppConfig::default().with_ascending(true);
        let mut app = App::new(&config);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('n'));

        let view = app.view();
        assert_eq!(*view.history_len(), 1);
        assert_eq!(*view.order(), Order::Descending);
        assert_eq!(*view.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
