//! Error types for event handling.

use thiserror::Error;

/// Errors that can occur when handling inbound events.
#[derive(Debug, Error, Clone)]
pub enum EventError {
    /// The frame has no `type` field.
    #[error("frame missing type field")]
    MissingType,

    /// The event type is unknown.
    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    /// The event payload is invalid.
    #[error("invalid event payload: {0}")]
    InvalidPayload(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::Serialization(err.to_string())
    }
}
