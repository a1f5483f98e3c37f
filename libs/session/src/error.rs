//! Error types for session operations.

use thiserror::Error;

/// Errors that can occur when managing a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An operation that needs an active profile was called without one.
    #[error("not signed in")]
    NotSignedIn,

    /// The supplied username is unusable.
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// The supplied email is unusable.
    #[error("invalid email: {0}")]
    InvalidEmail(String),

    /// The supplied password is unusable.
    #[error("invalid password: {0}")]
    InvalidPassword(String),
}
