//! Single-document editing session driving the storage client.
//!
//! Holds the in-memory document and the "recently saved" flag that stops the
//! same content from being posted twice in a row.

use crate::client::PasteClient;
use pastes_core::{
    Document, Expiry, LoadOutcome, PasteId, Preferences, StoreKind, DEFAULT_LANGUAGE,
};

/// Result of [`EditorSession::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing sent: empty content, or unchanged since the last save.
    Skipped,
    Saved(PasteId),
    Failed,
}

/// Parse state of a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonValidity {
    /// Empty content, or the document is not JSON.
    Empty,
    Valid,
    Invalid,
}

/// Message shown in place of content when a paste cannot be found.
pub fn not_found_message(id: &str) -> String {
    format!(
        "{}\n  not found: '{}'\n  maybe the paste expired?\n",
        NOT_FOUND_BANNER, id
    )
}

const NOT_FOUND_BANNER: &str = r"
  ██╗  ██╗ ██████╗ ██╗  ██╗
  ██║  ██║██╔═████╗██║  ██║
  ███████║██║██╔██║███████║
  ╚════██║████╔╝██║╚════██║
       ██║╚██████╔╝     ██║
       ╚═╝ ╚═════╝      ╚═╝
";

/// Editable document plus save bookkeeping.
#[derive(Debug, Clone)]
pub struct EditorSession {
    document: Document,
    recently_saved: bool,
    paste_id: Option<PasteId>,
}

impl EditorSession {
    /// Start an empty plain-text session on the preferred store.
    pub fn new(preferences: &Preferences) -> Self {
        Self {
            document: Document::new(String::new(), DEFAULT_LANGUAGE, preferences.default_store),
            recently_saved: false,
            paste_id: None,
        }
    }

    /// The document currently being edited.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Id of the paste last saved or opened in this session.
    pub fn paste_id(&self) -> Option<&PasteId> {
        self.paste_id.as_ref()
    }

    /// Whether the current content was already sent, successfully or not.
    pub fn recently_saved(&self) -> bool {
        self.recently_saved
    }

    /// Replace the text; re-enables saving.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.document.content = content.into();
        self.recently_saved = false;
    }

    /// Change the language tag; re-enables saving.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.document.language = language.into();
        self.recently_saved = false;
    }

    /// Choose the store used by the next save.
    pub fn set_store(&mut self, store: StoreKind) {
        self.document.store = store;
    }

    /// Clear the document and forget the current paste.
    pub fn reset(&mut self) {
        self.document = Document::default();
        self.recently_saved = false;
        self.paste_id = None;
    }

    /// Save the current document unless it is empty or already saved.
    ///
    /// The recently-saved flag is set after any attempt, so a failed save is
    /// retried only once the user edits the document.
    pub async fn save(&mut self, client: &PasteClient, expiry: Option<Expiry>) -> SaveStatus {
        if self.document.content.is_empty() || self.recently_saved {
            return SaveStatus::Skipped;
        }

        let result = client
            .save(
                &self.document.content,
                &self.document.language,
                self.document.store,
                expiry,
            )
            .await;
        self.recently_saved = true;
        match result {
            Ok(id) => {
                self.paste_id = Some(id.clone());
                SaveStatus::Saved(id)
            }
            Err(_) => SaveStatus::Failed,
        }
    }

    /// Replace the document with the paste stored under `id`.
    ///
    /// # Returns
    /// `true` when the paste was found. Otherwise the content becomes the
    /// not-found message.
    pub async fn open(&mut self, client: &PasteClient, id: &str) -> bool {
        match client.load(id).await {
            LoadOutcome::Found(paste) => {
                self.document.content = paste.content;
                if let Some(language) = paste.language {
                    self.document.language = language.to_string();
                }
                self.document.store = paste.store;
                self.paste_id = PasteId::new(id).ok();
                self.recently_saved = false;
                true
            }
            LoadOutcome::NotFound => {
                self.document.content = not_found_message(id);
                self.paste_id = None;
                self.recently_saved = false;
                false
            }
        }
    }

    /// Report whether a `json` document parses.
    pub fn json_validity(&self) -> JsonValidity {
        if self.document.language != "json" || self.document.content.is_empty() {
            return JsonValidity::Empty;
        }
        match serde_json::from_str::<serde_json::Value>(&self.document.content) {
            Ok(_) => JsonValidity::Valid,
            Err(_) => JsonValidity::Invalid,
        }
    }
}
