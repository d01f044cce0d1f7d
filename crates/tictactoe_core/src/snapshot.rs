//! Immutable board snapshots.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// One board state plus the move that produced it.
///
/// The initial snapshot has no move. Snapshots expose no mutators; a new
/// move always yields a new snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The all-empty starting snapshot.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Derives the snapshot reached by `player` marking `pos`.
    pub(crate) fn advance(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_move: Some(pos),
        }
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position played to reach this step.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// One-based `(row, col)` of the move that produced this snapshot.
    pub fn move_coordinates(&self) -> Option<(usize, usize)> {
        self.last_move.map(Position::coordinates)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
