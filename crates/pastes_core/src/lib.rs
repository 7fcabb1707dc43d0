//! Core domain library for pastes (config, language mapping, models, preferences).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across pastes crates.
pub mod constants;
/// Domain error types.
pub mod error;
/// Closed language tag set and content-type mapping.
pub mod language;
/// Data models shared by the storage client and its callers.
pub mod models;
/// Caller-owned editor preferences.
pub mod preferences;

pub use config::Config;
pub use constants::*;
pub use error::AppError;
pub use language::{content_type_to_language, language_to_content_type, parse_content_type};
pub use models::{Document, Expiry, LoadOutcome, LoadedPaste, PasteId, StoreKind};
pub use preferences::{Preferences, Theme};
