//! The session context and its lifecycle.

use fittrack_id::SessionId;

use crate::error::SessionError;
use crate::profile::{Profile, StatsUpdate};

const MAX_USERNAME_LEN: usize = 32;
const MIN_PASSWORD_LEN: usize = 8;

/// An explicit session: at most one active profile, created at sign-in or
/// registration and torn down at sign-out.
#[derive(Debug)]
pub struct SessionContext {
    id: SessionId,
    profile: Option<Profile>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    /// An empty context with no active profile.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            profile: None,
        }
    }

    /// Adopts a previously persisted profile, if any.
    pub fn resume(profile: Option<Profile>) -> Self {
        Self {
            id: SessionId::new(),
            profile,
        }
    }

    /// Identity of this session, for log correlation.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The active profile, if signed in.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Registers a new participant and signs them in.
    ///
    /// The credential provider is a mock: inputs are validated for shape,
    /// then a fresh level-1 profile is created. Replaces any prior session.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<&Profile, SessionError> {
        validate_username(username)?;
        validate_email(email)?;
        validate_password(password)?;

        self.id = SessionId::new();
        Ok(self.profile.insert(Profile::new(username, email)))
    }

    /// Signs in an existing participant.
    ///
    /// The mock provider derives the username from the email local part,
    /// as the upstream identity service would return it.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&Profile, SessionError> {
        validate_email(email)?;
        validate_password(password)?;

        let username = email.split('@').next().unwrap_or(email).to_string();

        self.id = SessionId::new();
        Ok(self.profile.insert(Profile::new(username, email)))
    }

    /// Tears down the session, returning the profile that was active.
    pub fn sign_out(&mut self) -> Option<Profile> {
        self.profile.take()
    }

    /// Refreshes the active profile's stats from a workout update.
    pub fn update_stats(&mut self, update: StatsUpdate) -> Result<&Profile, SessionError> {
        let profile = self.profile.as_mut().ok_or(SessionError::NotSignedIn)?;
        profile.xp = update.xp;
        profile.level = update.level;
        profile.exercises_today = update.exercises_today;
        Ok(profile)
    }
}

fn validate_username(username: &str) -> Result<(), SessionError> {
    if username.is_empty() {
        return Err(SessionError::InvalidUsername(
            "username cannot be empty".to_string(),
        ));
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(SessionError::InvalidUsername(format!(
            "username cannot exceed {MAX_USERNAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), SessionError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(SessionError::InvalidEmail(format!(
            "'{email}' is not a plausible address"
        )));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), SessionError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(SessionError::InvalidPassword(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_creates_level_one_profile() {
        let mut session = SessionContext::new();
        let profile = session
            .register("workout_warrior", "warrior@example.com", "hunter2hunter2")
            .unwrap();

        assert_eq!(profile.username, "workout_warrior");
        assert_eq!(profile.level, 1);
        assert_eq!(profile.xp, 0);
        assert!(profile.achievements.is_empty());
    }

    #[test]
    fn test_sign_in_derives_username_from_email() {
        let mut session = SessionContext::new();
        let profile = session
            .sign_in("cardio_fan@example.com", "correcthorse")
            .unwrap();
        assert_eq!(profile.username, "cardio_fan");
    }

    #[test]
    fn test_sign_out_tears_down() {
        let mut session = SessionContext::new();
        session.sign_in("a@example.com", "correcthorse").unwrap();

        let torn_down = session.sign_out();
        assert!(torn_down.is_some());
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_update_stats_requires_session() {
        let mut session = SessionContext::new();
        let result = session.update_stats(StatsUpdate {
            xp: 100,
            level: 1,
            exercises_today: 1,
        });
        assert_eq!(result.unwrap_err(), SessionError::NotSignedIn);
    }

    #[test]
    fn test_update_stats_refreshes_profile() {
        let mut session = SessionContext::new();
        session.sign_in("a@example.com", "correcthorse").unwrap();

        let profile = session
            .update_stats(StatsUpdate {
                xp: 340,
                level: 3,
                exercises_today: 2,
            })
            .unwrap();

        assert_eq!(profile.xp, 340);
        assert_eq!(profile.level, 3);
        assert_eq!(profile.exercises_today, 2);
    }

    #[test]
    fn test_bad_inputs_rejected() {
        let mut session = SessionContext::new();
        assert!(matches!(
            session.register("", "a@example.com", "correcthorse"),
            Err(SessionError::InvalidUsername(_))
        ));
        assert!(matches!(
            session.register("ok", "not-an-email", "correcthorse"),
            Err(SessionError::InvalidEmail(_))
        ));
        assert!(matches!(
            session.register("ok", "a@example.com", "short"),
            Err(SessionError::InvalidPassword(_))
        ));
    }

    #[test]
    fn test_resume_adopts_persisted_profile() {
        let profile = Profile::new("gym_rat", "gym@example.com");
        let session = SessionContext::resume(Some(profile.clone()));
        assert_eq!(session.profile(), Some(&profile));
    }
}
