//! Domain error types for validation of user-facing options.
use thiserror::Error;

/// Top-level domain error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Unknown expiry option: {0}")]
    InvalidExpiry(String),

    #[error("Unknown store: {0}")]
    InvalidStore(String),

    #[error("Invalid preference: {0}")]
    InvalidPreference(String),

    #[error("Paste id must not be empty")]
    EmptyPasteId,
}
