//! The participant profile held by an active session.

use fittrack_id::UserId;
use fittrack_scoreboard::ScoreEntry;
use serde::{Deserialize, Serialize};

/// The signed-in participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub level: u32,
    pub xp: u64,
    pub exercises_today: u32,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Profile {
    /// A fresh profile for a new participant.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            email: email.into(),
            level: 1,
            xp: 0,
            exercises_today: 0,
            achievements: Vec::new(),
        }
    }

    /// Projects this profile onto the scoreboard.
    pub fn score_entry(&self) -> ScoreEntry {
        ScoreEntry::new(self.id.to_string(), self.username.clone(), self.xp, self.level)
    }
}

/// A stats refresh reported by the workout producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsUpdate {
    pub xp: u64,
    pub level: u32,
    pub exercises_today: u32,
}
