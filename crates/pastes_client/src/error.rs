//! Error types for remote save/load calls.

use pastes_core::StoreKind;
use thiserror::Error;

/// Why a save or a single store attempt failed.
///
/// Nothing here escapes as a panic; `save` hands it back as a value and
/// `load` folds it into [`pastes_core::LoadOutcome::NotFound`].
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Refusing to save empty content")]
    EmptyContent,

    #[error("No base URL configured for the {0} store")]
    StoreNotConfigured(StoreKind),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Compression error: {0}")]
    Compression(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Whether the remote service answered with 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status(status) if *status == reqwest::StatusCode::NOT_FOUND)
    }
}
