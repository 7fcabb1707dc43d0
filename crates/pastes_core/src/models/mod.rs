//! Data models shared by the storage client and its callers.

/// Expiry options for private-store pastes.
pub mod expiry;
/// Paste documents, identifiers and load outcomes.
pub mod paste;

pub use expiry::Expiry;
pub use paste::{Document, LoadOutcome, LoadedPaste, PasteId, StoreKind};
