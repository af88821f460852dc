//! Orchestration services for session identity.

pub mod account;

pub use account::{SESSION_SNAPSHOT_KEY, SessionService, SessionServiceError, SessionServiceResult};
