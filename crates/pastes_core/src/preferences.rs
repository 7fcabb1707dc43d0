//! Caller-owned editor preferences with a validated option set.
//!
//! Nothing in the storage client reads these; the embedding application owns
//! an instance and persists it however it likes.

use crate::constants::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::error::AppError;
use crate::models::StoreKind;
use serde::{Deserialize, Serialize};

/// Editor colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Editor preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub font_size: u8,
    /// Store preselected for new documents.
    pub default_store: StoreKind,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: DEFAULT_FONT_SIZE,
            default_store: StoreKind::default(),
        }
    }
}

fn font_size_in_range(size: i32) -> bool {
    (i32::from(MIN_FONT_SIZE)..=i32::from(MAX_FONT_SIZE)).contains(&size)
}

impl Preferences {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), AppError> {
        if !font_size_in_range(i32::from(self.font_size)) {
            return Err(AppError::InvalidPreference(format!(
                "font size {} outside {}..={}",
                self.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        Ok(())
    }

    /// Adjust the font size by `delta` if the result stays in range.
    ///
    /// # Returns
    /// `true` when the size changed.
    pub fn zoom(&mut self, delta: i32) -> bool {
        let next = i32::from(self.font_size).saturating_add(delta);
        if delta == 0 || !font_size_in_range(next) {
            return false;
        }
        match u8::try_from(next) {
            Ok(size) => {
                self.font_size = size;
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.font_size, 16);
        assert_eq!(prefs.default_store, StoreKind::Public);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn zoom_stops_at_bounds() {
        let mut prefs = Preferences {
            font_size: MAX_FONT_SIZE,
            ..Preferences::default()
        };
        assert!(!prefs.zoom(1));
        assert_eq!(prefs.font_size, MAX_FONT_SIZE);
        assert!(prefs.zoom(-1));
        assert_eq!(prefs.font_size, MAX_FONT_SIZE - 1);

        prefs.font_size = MIN_FONT_SIZE;
        assert!(!prefs.zoom(-1));
        assert!(!prefs.zoom(i32::MIN));
        assert_eq!(prefs.font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn validate_rejects_out_of_range_font() {
        for size in [0, MIN_FONT_SIZE - 1, MAX_FONT_SIZE + 1, u8::MAX] {
            let prefs = Preferences {
                font_size: size,
                ..Preferences::default()
            };
            assert!(
                matches!(prefs.validate(), Err(AppError::InvalidPreference(_))),
                "size: {}",
                size
            );
        }
    }

    #[test]
    fn deserialize_fills_missing_fields_and_rejects_unknown_theme() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"theme":"light"}"#).expect("partial prefs");
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.font_size, DEFAULT_FONT_SIZE);

        assert!(serde_json::from_str::<Preferences>(r#"{"theme":"neon"}"#).is_err());
        assert!(serde_json::from_str::<Preferences>(r#"{"default_store":"shared"}"#).is_err());
    }
}
