//! The scoreboard snapshot and reconciliation operations.

use serde::{Deserialize, Serialize};

use crate::entry::{seed_entries, ScoreEntry};

/// A materialized scoreboard snapshot, sorted by XP descending.
///
/// Ties keep their prior relative order: the sort is stable, replacement
/// happens in place before re-sorting, and new entries are appended, so an
/// incoming entry that ties an existing one lands after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    /// The board seeded with the built-in default list.
    pub fn seed() -> Self {
        Self {
            entries: seed_entries(),
        }
    }

    /// Builds a board from arbitrary entries, restoring the ordering
    /// invariant. Used when adopting a persisted snapshot.
    pub fn from_entries(entries: Vec<ScoreEntry>) -> Self {
        let mut board = Self { entries };
        board.resort();
        board
    }

    /// Folds an incoming entry into the board.
    ///
    /// An existing entry with the same username is replaced in place;
    /// otherwise the entry is appended. The board is then re-sorted.
    /// Reapplying an identical entry leaves the board unchanged.
    pub fn apply(&mut self, incoming: ScoreEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.username == incoming.username)
        {
            Some(existing) => *existing = incoming,
            None => self.entries.push(incoming),
        }
        self.resort();
    }

    /// 1-based rank of a username, or `None` if absent.
    pub fn rank_of(&self, username: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.username == username)
            .map(|i| i + 1)
    }

    /// All entries in rank order.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// The top `n` entries in rank order.
    pub fn top(&self, n: usize) -> &[ScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn resort(&mut self) {
        // Stable: equal-XP entries keep their relative order.
        self.entries.sort_by(|a, b| b.xp.cmp(&a.xp));
    }
}
