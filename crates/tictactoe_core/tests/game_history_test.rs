//! Tests for move history and time travel.

use tictactoe_core::invariants::{HistoryInvariants, InvariantSet};
use tictactoe_core::{
    GameState, GameStatus, MoveOutcome, Player, Position, Rejection, Square, WINNING_LINES,
};

fn positions(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|i| Position::try_from(*i).expect("index in 0-8"))
        .collect()
}

#[test]
fn test_top_row_win_scenario() {
    let state = GameState::replay(positions(&[0, 4, 1, 5, 2]));

    assert_eq!(state.history().len(), 6);
    let x = Square::Occupied(Player::X);
    let o = Square::Occupied(Player::O);
    let e = Square::Empty;
    assert_eq!(state.current_board().squares(), &[x, x, x, e, o, o, e, e, e]);

    let win = state.current_winner().expect("X completes the top row");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, WINNING_LINES[0]);
    assert_eq!(win.line.map(Position::to_index), [0, 1, 2]);
}

#[test]
fn test_repeated_click_is_noop() {
    let mut state = GameState::new();
    state.apply_move(Position::Center);
    let outcome = state.apply_move(Position::Center);

    assert_eq!(outcome, MoveOutcome::Ignored(Rejection::SquareOccupied(Position::Center)));
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.step(), 1);
}

#[test]
fn test_move_grows_history_by_one_and_records_position() {
    let mut state = GameState::new();
    for (n, pos) in positions(&[4, 0, 8, 2]).into_iter().enumerate() {
        let before = state.history().len();
        assert!(state.apply_move(pos).is_placed());
        assert_eq!(state.history().len(), before + 1);
        assert_eq!(state.history()[n + 1].last_move(), Some(pos));
    }
}

#[test]
fn test_decided_game_never_changes() {
    let mut state = GameState::replay(positions(&[0, 4, 1, 5, 2]));
    for pos in Position::ALL {
        assert!(!state.apply_move(pos).is_placed());
        assert_eq!(state.history().len(), 6);
        assert_eq!(state.step(), 5);
    }
}

#[test]
fn test_move_after_rewind_discards_future() {
    let mut state = GameState::replay(positions(&[0, 4, 1, 5]));
    assert_eq!(state.history().len(), 5);

    state.view_step(2);
    assert_eq!(state.history().len(), 5, "viewing must not touch history");
    assert_eq!(state.next_player(), Player::X);

    state.apply_move(Position::BottomRight);
    assert_eq!(state.history().len(), 4, "history length becomes step + 2");
    assert_eq!(state.step(), 3);
    assert_eq!(state.current_board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(state.current_board().get(Position::TopCenter), Square::Empty);
    assert_eq!(state.current_board().get(Position::BottomRight), Square::Occupied(Player::X));
}

#[test]
fn test_move_at_game_start_resets_future() {
    let mut state = GameState::replay(positions(&[0, 1, 2]));
    state.view_step(0);
    state.apply_move(Position::Center);

    assert_eq!(state.history().len(), 2);
    assert_eq!(state.current_board().occupied(), 1);
}

#[test]
fn test_next_player_tracks_step_parity() {
    let mut state = GameState::replay(positions(&[4, 0, 8, 2, 6]));
    for step in (0..state.history().len()).rev() {
        state.view_step(step);
        assert_eq!(state.x_is_next(), step % 2 == 0);
    }
    state.apply_move(Position::BottomCenter);
    assert_eq!(state.x_is_next(), state.step() % 2 == 0);
}

#[test]
fn test_viewing_does_not_alter_snapshots() {
    let mut state = GameState::replay(positions(&[4, 0, 8]));
    let history = state.history().clone();
    state.view_step(0);
    state.view_step(3);
    state.toggle_order();
    assert_eq!(state.history(), &history);
}

#[test]
fn test_invariants_hold_through_play() {
    let mut state = GameState::new();
    let script: [(Option<usize>, usize); 7] = [
        (None, 4),
        (None, 0),
        (Some(1), 8),
        (None, 8),
        (None, 2),
        (Some(0), 6),
        (None, 3),
    ];
    for (rewind, cell) in script {
        if let Some(step) = rewind {
            state.view_step(step);
        }
        state.apply_move(Position::try_from(cell).expect("index in 0-8"));
        assert!(HistoryInvariants::check_all(&state).is_ok());
    }
}

#[test]
fn test_full_board_is_terminal() {
    let mut state = GameState::replay(positions(&[0, 1, 2, 4, 3, 5, 7, 6, 8]));
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.current_winner(), None);
    assert_eq!(state.apply_move(Position::Center), MoveOutcome::Ignored(Rejection::GameOver));

    state.view_step(3);
    assert_eq!(state.status(), GameStatus::InProgress);
}
