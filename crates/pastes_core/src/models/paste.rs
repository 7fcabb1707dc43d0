//! Paste documents, identifiers and load outcomes.

use crate::constants::DEFAULT_LANGUAGE;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical namespace on the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Public,
    Private,
}

impl StoreKind {
    /// Lowercase wire/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Public => "public",
            StoreKind::Private => "private",
        }
    }

    /// Whether saves to this store carry an expiry header.
    pub fn supports_expiry(self) -> bool {
        matches!(self, StoreKind::Private)
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "public" => Ok(StoreKind::Public),
            "private" => Ok(StoreKind::Private),
            other => Err(AppError::InvalidStore(other.to_string())),
        }
    }
}

/// Opaque identifier assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasteId(String);

impl PasteId {
    /// Wrap a service-assigned id. Only emptiness is checked.
    pub fn new(id: impl Into<String>) -> Result<Self, AppError> {
        let id = id.into();
        if id.is_empty() {
            return Err(AppError::EmptyPasteId);
        }
        Ok(Self(id))
    }

    /// Borrow the raw id, e.g. for use as a URL path segment.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PasteId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PasteId> for String {
    fn from(value: PasteId) -> Self {
        value.0
    }
}

impl AsRef<str> for PasteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PasteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-memory text being edited, saved or loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub language: String,
    pub store: StoreKind,
}

impl Document {
    /// Create a document in the given language and store.
    pub fn new(content: impl Into<String>, language: impl Into<String>, store: StoreKind) -> Self {
        Self {
            content: content.into(),
            language: language.into(),
            store,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_LANGUAGE, StoreKind::Public)
    }
}

/// A paste successfully fetched from one of the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPaste {
    pub content: String,
    /// Derived from the response content type; `None` means fall back to plain.
    pub language: Option<&'static str>,
    /// Store that actually satisfied the request.
    pub store: StoreKind,
}

impl LoadedPaste {
    /// Convert into an editable document, defaulting the language to plain.
    pub fn into_document(self) -> Document {
        Document::new(
            self.content,
            self.language.unwrap_or(DEFAULT_LANGUAGE),
            self.store,
        )
    }
}

/// Terminal state of a single load call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Found(LoadedPaste),
    /// Neither store had the id, or every attempt failed.
    NotFound,
}

impl LoadOutcome {
    /// Whether either store returned the paste.
    pub fn is_found(&self) -> bool {
        matches!(self, LoadOutcome::Found(_))
    }

    /// Take the loaded paste, discarding the not-found case.
    ///
    /// # Returns
    /// `Some` for [`LoadOutcome::Found`], otherwise `None`.
    pub fn found(self) -> Option<LoadedPaste> {
        match self {
            LoadOutcome::Found(paste) => Some(paste),
            LoadOutcome::NotFound => None,
        }
    }
}
