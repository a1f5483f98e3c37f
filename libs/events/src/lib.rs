//! # fittrack-events
//!
//! Validated inbound message contract for the FitTrack platform.
//!
//! ## Design Principles
//!
//! - External producers are untrusted: every frame is schema-checked at the
//!   boundary and converted into a typed event or a validation failure
//! - Malformed frames are rejected, never defaulted into state
//! - Delivery is at-most-once per emission; duplicates are tolerated because
//!   downstream application is idempotent
//!
//! ## Frame Format
//!
//! Producers emit frames shaped `{ "type": <string>, "data": <object> }`
//! with camelCase payload fields:
//!
//! - `updateLeaderboard` — a participant's new score
//! - `exerciseData` — live workout progress from the exercise detector

mod decode;
mod error;
mod types;

pub use decode::decode;
pub use error::EventError;
pub use types::*;
