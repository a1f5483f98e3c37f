//! Application state shared across request handlers.
//!
//! All mutations flow through one mutex-guarded [`Tracker`], so updates are
//! applied in delivery order: no reordering, no batching, each update an
//! atomic non-suspending computation over the locked state.

use std::sync::Arc;

use fittrack_events::{InboundEvent, ScoreUpdate, WorkoutProgress};
use fittrack_id::UserId;
use fittrack_scoreboard::{ScoreEntry, Scoreboard};
use fittrack_session::{Profile, SessionContext, SessionError, StatsUpdate};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::store::SnapshotStore;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<Tracker>>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(tracker: Tracker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Lock the tracker. Handlers hold the guard for the whole operation.
    pub async fn tracker(&self) -> MutexGuard<'_, Tracker> {
        self.inner.lock().await
    }
}

/// The reconciler state: scoreboard, session, and their persistence.
pub struct Tracker {
    store: SnapshotStore,
    board: Scoreboard,
    session: SessionContext,
}

impl Tracker {
    /// Loads persisted state and folds any resumed profile into the board.
    pub fn bootstrap(store: SnapshotStore) -> Self {
        let board = store.load_leaderboard();
        let session = SessionContext::resume(store.load_profile());

        let mut tracker = Self {
            store,
            board,
            session,
        };

        if let Some(profile) = tracker.session.profile() {
            debug!(username = %profile.username, "Resumed session");
            let entry = profile.score_entry();
            tracker.board.apply(entry);
            tracker.persist_board();
        }

        tracker
    }

    pub fn board(&self) -> &Scoreboard {
        &self.board
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.session.profile()
    }

    /// Applies a validated inbound event and persists the outcome.
    pub fn apply_event(&mut self, event: InboundEvent) {
        match event {
            InboundEvent::LeaderboardUpdate(update) => self.apply_score_update(update),
            InboundEvent::WorkoutProgress(progress) => self.apply_workout_progress(progress),
        }
    }

    /// Registers a new participant and starts their session.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Profile, SessionError> {
        let profile = self.session.register(username, email, password)?.clone();
        debug!(session = %self.session.id(), username = %profile.username, "Session started");
        self.adopt_profile(&profile);
        Ok(profile)
    }

    /// Signs a participant in and starts their session.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<Profile, SessionError> {
        let profile = self.session.sign_in(email, password)?.clone();
        debug!(session = %self.session.id(), username = %profile.username, "Session started");
        self.adopt_profile(&profile);
        Ok(profile)
    }

    /// Ends the session. The participant's board entry remains.
    pub fn sign_out(&mut self) -> Option<Profile> {
        let profile = self.session.sign_out();
        if let Err(e) = self.store.clear_profile() {
            warn!(error = %e, "Failed to clear profile slot");
        }
        profile
    }

    fn apply_score_update(&mut self, update: ScoreUpdate) {
        // Keep the participant token stable across updates: reuse the
        // producer's token, else the one already on the board, else mint.
        let id = update
            .id
            .clone()
            .or_else(|| {
                self.board
                    .entries()
                    .iter()
                    .find(|e| e.username == update.username)
                    .map(|e| e.id.clone())
            })
            .unwrap_or_else(|| UserId::new().to_string());

        let entry = ScoreEntry {
            id,
            username: update.username,
            xp: update.xp,
            level: update.level,
            avatar: update.avatar.filter(|a| !a.is_empty()),
        };

        self.board.apply(entry);
        self.persist_board();
    }

    fn apply_workout_progress(&mut self, progress: WorkoutProgress) {
        let update = StatsUpdate {
            xp: progress.xp,
            level: progress.level,
            exercises_today: progress.exercises_today,
        };

        let profile = match self.session.update_stats(update) {
            Ok(profile) => profile.clone(),
            Err(SessionError::NotSignedIn) => {
                debug!(
                    exercise = %progress.exercise_type,
                    reps = progress.reps,
                    "Workout progress with no active session, stats dropped"
                );
                return;
            }
            Err(e) => {
                warn!(error = %e, "Failed to apply workout progress");
                return;
            }
        };

        if let Err(e) = self.store.save_profile(&profile) {
            warn!(error = %e, "Failed to persist profile");
        }

        self.board.apply(profile.score_entry());
        self.persist_board();
    }

    /// Persists the session profile and folds it into the board.
    fn adopt_profile(&mut self, profile: &Profile) {
        if let Err(e) = self.store.save_profile(profile) {
            warn!(error = %e, "Failed to persist profile");
        }
        self.board.apply(profile.score_entry());
        self.persist_board();
    }

    /// Persistence failure is non-fatal: the in-memory snapshot stays
    /// authoritative for the rest of the session.
    fn persist_board(&self) {
        if let Err(e) = self.store.save_leaderboard(&self.board) {
            warn!(error = %e, "Failed to persist scoreboard");
        }
    }
}
