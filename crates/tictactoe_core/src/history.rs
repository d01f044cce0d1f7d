//! Append-biased snapshot log.

use super::Snapshot;
use serde::Serialize;
use tracing::{debug, instrument};

/// Ordered sequence of every snapshot reached so far.
///
/// Always holds at least the initial snapshot at index 0. Entries are only
/// appended or dropped from the tail; an existing snapshot is never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty starting snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots (moves made + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the newest snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates snapshots oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Drops every snapshot after `step`.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) {
        if step + 1 < self.snapshots.len() {
            debug!(discarded = self.snapshots.len() - step - 1, "Discarding superseded steps");
            self.snapshots.truncate(step + 1);
        }
    }

    /// Appends a snapshot and returns its step index.
    pub(crate) fn push(&mut self, snapshot: Snapshot) -> usize {
        self.snapshots.push(snapshot);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for History {
    type Output = Snapshot;

    fn index(&self, step: usize) -> &Snapshot {
        &self.snapshots[step]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_history_has_initial_snapshot() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_step(), 0);
        assert_eq!(history[0], Snapshot::initial());
    }

    #[test]
    fn test_truncate_after_keeps_prefix() {
        let mut history = History::new();
        let first = history[0].advance(Position::Center, Player::X);
        history.push(first);
        history.push(first.advance(Position::TopLeft, Player::O));
        assert_eq!(history.len(), 3);

        history.truncate_after(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history[1], first);
    }

    #[test]
    fn test_truncate_after_last_is_noop() {
        let mut history = History::new();
        history.truncate_after(0);
        assert_eq!(history.len(), 1);
    }
}
