//! Configuration loading from environment variables.

use crate::constants::DEFAULT_PUBLIC_URL;
use crate::models::StoreKind;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Environment variable naming the public store base URL.
pub const PUBLIC_URL_ENV: &str = "PASTES_PUBLIC_URL";
/// Environment variable naming the private store base URL.
pub const PRIVATE_URL_ENV: &str = "PASTES_PRIVATE_URL";
/// Environment variable holding the optional transport timeout in seconds.
pub const REQUEST_TIMEOUT_ENV: &str = "PASTES_REQUEST_TIMEOUT_SECS";

/// Endpoints and transport settings for the storage client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub public_url: String,
    /// Private store operations fail without a request when this is unset.
    pub private_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            private_url: None,
            request_timeout_secs: None,
        }
    }
}

/// Read an environment variable, treating blank values as missing.
///
/// # Returns
/// The trimmed value when present and non-blank.
pub fn env_non_blank(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse a timeout value in whole seconds.
///
/// Zero, negative and non-numeric values are rejected.
pub fn parse_timeout_secs(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        let config = Self {
            public_url: env_non_blank(PUBLIC_URL_ENV)
                .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string()),
            private_url: env_non_blank(PRIVATE_URL_ENV),
            request_timeout_secs: env_non_blank(REQUEST_TIMEOUT_ENV).and_then(|raw| {
                let parsed = parse_timeout_secs(&raw);
                if parsed.is_none() {
                    tracing::warn!(
                        "Invalid {}='{}'; running without a request timeout",
                        REQUEST_TIMEOUT_ENV,
                        raw
                    );
                }
                parsed
            }),
        };
        if config.private_url.is_none() {
            tracing::debug!("{} unset; private store disabled", PRIVATE_URL_ENV);
        }
        config
    }

    /// Base URL configured for `store`, if any.
    pub fn base_url(&self, store: StoreKind) -> Option<&str> {
        match store {
            StoreKind::Public => Some(self.public_url.as_str()),
            StoreKind::Private => self.private_url.as_deref(),
        }
    }

    /// Transport timeout, when one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
