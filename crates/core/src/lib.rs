//! Shared primitives for all Rust crates in the research registry.

#![forbid(unsafe_code)]

/// Authentication primitives shared across services.
pub mod auth;

use thiserror::Error;

pub use auth::UserIdentity;

/// Result type used across registry crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Caller presented no credential, or one that could not be verified.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Caller is authenticated but its role is not allowed to act.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Storage or other unexpected server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns true for failures the server owns rather than the caller.
    #[must_use]
    pub fn is_server_fault(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}
