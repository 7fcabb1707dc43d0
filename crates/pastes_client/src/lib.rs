//! Async storage client for the public and private paste stores.

/// Content Storage Client (save/load round trips).
pub mod client;
/// Write-path compression.
pub mod codec;
/// Client error taxonomy.
pub mod error;
/// Endpoint selection and load fallback order.
pub mod resolver;
/// Single-document editor session driving the client.
pub mod session;

pub use client::PasteClient;
pub use error::ClientError;
pub use pastes_core::{
    Config, Document, Expiry, LoadOutcome, LoadedPaste, PasteId, Preferences, StoreKind,
};
pub use resolver::{LoadAttempt, SaveTarget, StoreResolver};
pub use session::{EditorSession, JsonValidity, SaveStatus};
