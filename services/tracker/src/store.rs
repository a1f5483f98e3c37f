//! Snapshot persistence.
//!
//! This module owns the durable local slots for the scoreboard and the
//! session profile:
//! - Writes are atomic (write to temp, rename) and last-writer-wins
//! - The scoreboard slot degrades to the built-in seed list when absent,
//!   unreadable, unparseable, version-mismatched, or empty — loading
//!   never fails
//! - A write failure is an error for the caller to log and absorb; the
//!   in-memory snapshot stays authoritative

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fittrack_scoreboard::{ScoreEntry, Scoreboard};
use fittrack_session::Profile;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

/// Persisted slot format version.
const STATE_VERSION: u32 = 1;

const LEADERBOARD_SLOT: &str = "leaderboard.json";
const PROFILE_SLOT: &str = "profile.json";

/// Persisted scoreboard slot.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedBoard {
    version: u32,
    entries: Vec<ScoreEntry>,
}

/// Persisted profile slot.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedProfile {
    version: u32,
    profile: Profile,
}

/// File-backed store for the well-known snapshot slots.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    data_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Load the scoreboard snapshot.
    ///
    /// Malformed persisted state is treated as absent: the caller always
    /// gets a usable board, seeded with defaults if need be.
    pub fn load_leaderboard(&self) -> Scoreboard {
        let path = self.data_dir.join(LEADERBOARD_SLOT);
        match self.read_slot::<PersistedBoard>(&path) {
            Some(state) if state.version == STATE_VERSION && !state.entries.is_empty() => {
                debug!(path = %path.display(), entries = state.entries.len(), "Loaded scoreboard");
                Scoreboard::from_entries(state.entries)
            }
            Some(state) => {
                warn!(
                    path = %path.display(),
                    file_version = state.version,
                    entries = state.entries.len(),
                    "Unusable scoreboard slot, falling back to seed list"
                );
                Scoreboard::seed()
            }
            None => Scoreboard::seed(),
        }
    }

    /// Persist the full scoreboard snapshot, overwriting any prior value.
    pub fn save_leaderboard(&self, board: &Scoreboard) -> Result<()> {
        let state = PersistedBoard {
            version: STATE_VERSION,
            entries: board.entries().to_vec(),
        };
        self.write_slot(&self.data_dir.join(LEADERBOARD_SLOT), &state)
    }

    /// Load the persisted session profile, if a valid one exists.
    pub fn load_profile(&self) -> Option<Profile> {
        let path = self.data_dir.join(PROFILE_SLOT);
        let state = self.read_slot::<PersistedProfile>(&path)?;
        if state.version != STATE_VERSION {
            warn!(
                path = %path.display(),
                file_version = state.version,
                "Profile slot version mismatch, ignoring"
            );
            return None;
        }
        Some(state.profile)
    }

    /// Persist the session profile.
    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        let state = PersistedProfile {
            version: STATE_VERSION,
            profile: profile.clone(),
        };
        self.write_slot(&self.data_dir.join(PROFILE_SLOT), &state)
    }

    /// Remove the profile slot at sign-out.
    pub fn clear_profile(&self) -> Result<()> {
        let path = self.data_dir.join(PROFILE_SLOT);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }

    /// Read and parse a slot. Absent or malformed slots yield `None`.
    fn read_slot<T: DeserializeOwned>(&self, path: &Path) -> Option<T> {
        if !path.exists() {
            debug!(path = %path.display(), "No slot file, treating as absent");
            return None;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read slot, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse slot, treating as absent");
                None
            }
        }
    }

    /// Serialize and write a slot atomically (write to temp, rename).
    fn write_slot<T: Serialize>(&self, path: &Path, state: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("tmp");
        let content = serde_json::to_string_pretty(state).context("Failed to serialize slot")?;

        fs::write(&tmp_path, &content)
            .with_context(|| format!("Failed to write temp file: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        debug!(path = %path.display(), "Saved slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fittrack_scoreboard::ScoreEntry;
    use tempfile::tempdir;

    fn store() -> (tempfile::TempDir, SnapshotStore) {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_absent_slot_yields_seed() {
        let (_dir, store) = store();
        let board = store.load_leaderboard();
        assert_eq!(board.len(), 10);
        assert_eq!(board.rank_of("fitness_pro"), Some(1));
    }

    #[test]
    fn test_leaderboard_roundtrip() {
        let (_dir, store) = store();

        let mut board = store.load_leaderboard();
        board.apply(ScoreEntry::new("usr_x", "newuser", 5_000, 12));
        store.save_leaderboard(&board).unwrap();

        let loaded = store.load_leaderboard();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_save_load_is_noop_on_valid_snapshot() {
        let (_dir, store) = store();
        let board = store.load_leaderboard();
        store.save_leaderboard(&board).unwrap();
        assert_eq!(store.load_leaderboard(), board);
    }

    #[test]
    fn test_malformed_slot_yields_seed() {
        let (dir, store) = store();
        fs::write(dir.path().join(LEADERBOARD_SLOT), "not json {").unwrap();

        let board = store.load_leaderboard();
        assert_eq!(board.len(), 10);
    }

    #[test]
    fn test_version_mismatch_yields_seed() {
        let (dir, store) = store();
        fs::write(
            dir.path().join(LEADERBOARD_SLOT),
            r#"{"version": 99, "entries": [{"id": "a", "username": "x", "xp": 1, "level": 1}]}"#,
        )
        .unwrap();

        let board = store.load_leaderboard();
        assert_eq!(board.len(), 10);
    }

    #[test]
    fn test_empty_entries_yields_seed() {
        let (dir, store) = store();
        fs::write(
            dir.path().join(LEADERBOARD_SLOT),
            r#"{"version": 1, "entries": []}"#,
        )
        .unwrap();

        let board = store.load_leaderboard();
        assert_eq!(board.len(), 10);
    }

    #[test]
    fn test_profile_roundtrip_and_clear() {
        let (_dir, store) = store();
        assert!(store.load_profile().is_none());

        let profile = Profile::new("gym_rat", "gym@example.com");
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile(), Some(profile));

        store.clear_profile().unwrap();
        assert!(store.load_profile().is_none());
    }

    #[test]
    fn test_clear_absent_profile_is_ok() {
        let (_dir, store) = store();
        store.clear_profile().unwrap();
    }
}
