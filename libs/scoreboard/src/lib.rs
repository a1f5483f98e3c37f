//! Ranked scoreboard primitives.
//!
//! This library maintains the leaderboard snapshot: an ordered list of
//! participant entries ranked by experience points. Key concepts:
//!
//! - **Entry**: One participant's standing (username, XP, level, avatar).
//! - **Snapshot**: The full materialized board at a point in time.
//! - **Reconciliation**: Folding an incoming score update into the board.
//!
//! # Invariants
//!
//! - A snapshot is always sorted by XP descending
//! - Ties keep their prior relative order (stable sort)
//! - Usernames are unique within a snapshot; matching is case-sensitive
//! - Applying an update is idempotent and side-effect-free with respect
//!   to storage
//!
//! Persistence is the caller's concern; everything here is a pure data
//! transform so it can be tested independent of the storage medium.

mod board;
mod entry;
pub mod progress;

pub use board::Scoreboard;
pub use entry::ScoreEntry;
