//! Error types for session domain validation.

use thiserror::Error;

/// Errors returned while validating session values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// Email or password is missing.
    #[error("email and password are required")]
    MissingCredentials,
}
