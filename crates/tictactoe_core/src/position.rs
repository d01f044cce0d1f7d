//! Typed board positions (0-8, row-major).

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8).
///
/// Index `i` lives at row `i / 3`, column `i % 3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Raw cell index outside 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position {} out of bounds (must be 0-8)", index)]
pub struct PositionError {
    /// The rejected index.
    pub index: usize,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// One-based `(row, col)` pair, as shown in the move list.
    pub fn coordinates(self) -> (usize, usize) {
        (self.row() + 1, self.col() + 1)
    }

    /// Position at a zero-based row and column, if both are in 0-2.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}

impl TryFrom<usize> for Position {
    type Error = PositionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(PositionError { index })
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_mapping() {
        assert_eq!((Position::TopLeft.row(), Position::TopLeft.col()), (0, 0));
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
        assert_eq!(Position::BottomCenter.coordinates(), (3, 2));
    }

    #[test]
    fn test_at_round_trips_with_row_col() {
        for pos in Position::ALL {
            assert_eq!(Position::at(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::at(3, 0), None);
    }

    #[test]
    fn test_try_from_rejects_nine() {
        assert_eq!(Position::try_from(9), Err(PositionError { index: 9 }));
        assert_eq!(
            PositionError { index: 12 }.to_string(),
            "Position 12 out of bounds (must be 0-8)"
        );
    }
}
