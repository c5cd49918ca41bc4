//! Application error types

use paramstring_domain::{ConfigurationError, DomainError};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A settings document could not be read.
    #[error("settings error: {0}")]
    Settings(String),
}

impl From<ConfigurationError> for ApplicationError {
    fn from(err: ConfigurationError) -> Self {
        Self::Domain(err.into())
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
