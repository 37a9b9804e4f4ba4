//! Domain error types

use std::time::Duration;

use thiserror::Error;

/// Domain-level errors raised while validating clock settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The refresh interval must lie between one millisecond and a day.
    #[error("invalid refresh interval: {0:?}")]
    InvalidInterval(Duration),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
