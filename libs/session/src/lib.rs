//! # fittrack-session
//!
//! Session context and participant profile for the FitTrack platform.
//!
//! ## Design Principles
//!
//! - Session state is an explicit value with an explicit lifecycle: created
//!   at sign-in or registration, torn down at sign-out. Nothing here is
//!   ambient or process-global; the owner passes the context to the
//!   functions that need it.
//! - The credential provider is a local mock (no network), but the contract
//!   is shaped so a real provider can be slotted in behind the same
//!   operations.

mod context;
mod error;
mod profile;

pub use context::SessionContext;
pub use error::SessionError;
pub use profile::{Profile, StatsUpdate};
