//! Scoreboard entries and the built-in seed list.

use serde::{Deserialize, Serialize};

/// One participant's standing on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Opaque participant token. Seed entries carry `seed_*` tokens,
    /// live entries carry `usr_*` IDs. Never used for matching.
    pub id: String,

    /// Display name. The unique key used for matching, case-sensitive.
    pub username: String,

    /// Experience point total.
    pub xp: u64,

    /// Level, derived externally from XP.
    pub level: u32,

    /// Optional avatar reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ScoreEntry {
    /// Creates an entry with no avatar.
    pub fn new(id: impl Into<String>, username: impl Into<String>, xp: u64, level: u32) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            xp,
            level,
            avatar: None,
        }
    }
}

/// The fixed built-in list used when no valid persisted snapshot exists.
pub(crate) fn seed_entries() -> Vec<ScoreEntry> {
    [
        ("fitness_pro", 12_500, 25),
        ("workout_king", 9_800, 20),
        ("gym_enthusiast", 7_600, 16),
        ("exercise_queen", 6_200, 14),
        ("health_guru", 5_500, 12),
        ("muscle_master", 4_800, 11),
        ("cardio_king", 4_200, 10),
        ("fitness_fanatic", 3_600, 9),
        ("workout_warrior", 3_100, 8),
        ("active_achiever", 2_800, 7),
    ]
    .iter()
    .enumerate()
    .map(|(i, &(username, xp, level))| {
        ScoreEntry::new(format!("seed_{:02}", i + 1), username, xp, level)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_ten_unique_names() {
        let seed = seed_entries();
        assert_eq!(seed.len(), 10);

        let mut names: Vec<&str> = seed.iter().map(|e| e.username.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_seed_is_sorted_descending() {
        let seed = seed_entries();
        assert!(seed.windows(2).all(|w| w[0].xp >= w[1].xp));
        assert_eq!(seed[0].username, "fitness_pro");
        assert_eq!(seed[9].username, "active_achiever");
    }

    #[test]
    fn test_avatar_omitted_from_json_when_absent() {
        let entry = ScoreEntry::new("seed_01", "fitness_pro", 12_500, 25);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("avatar").is_none());
    }
}
