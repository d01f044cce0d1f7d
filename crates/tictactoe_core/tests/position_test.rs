//! Tests for tic-tac-toe positions.

use tictactoe_core::{Position, PositionError};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
    assert_eq!(Position::try_from(9usize), Err(PositionError { index: 9 }));
}

#[test]
fn test_one_based_coordinates() {
    assert_eq!(Position::TopLeft.coordinates(), (1, 1));
    assert_eq!(Position::MiddleRight.coordinates(), (2, 3));
    assert_eq!(Position::BottomLeft.coordinates(), (3, 1));
}

#[test]
fn test_serializes_as_index() {
    assert_eq!(serde_json::to_string(&Position::MiddleLeft).unwrap(), "3");
    assert_eq!(serde_json::from_str::<Position>("7").unwrap(), Position::BottomCenter);
    assert!(serde_json::from_str::<Position>("9").is_err());
}

#[test]
fn test_iter_matches_index_order() {
    use strum::IntoEnumIterator;
    let iterated: Vec<Position> = Position::iter().collect();
    assert_eq!(iterated, Position::ALL);
}
