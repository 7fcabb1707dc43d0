//! Endpoint selection for saves and the ordered fallback plan for loads.

use crate::error::ClientError;
use pastes_core::{Config, Expiry, PasteId, StoreKind, POST_PATH_SEGMENT};
use reqwest::Url;

/// Order in which stores are tried when loading. Private wins ties.
pub const LOAD_ORDER: [StoreKind; 2] = [StoreKind::Private, StoreKind::Public];

/// Where and how a save is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTarget {
    pub store: StoreKind,
    pub url: Url,
    /// Value of the expiry header; always `None` for the public store.
    pub expiry_minutes: Option<i64>,
}

/// One step of a load: the store and its resolved endpoint.
///
/// An unresolvable endpoint (store not configured, bad base URL) is kept in
/// the plan so the step fails without touching the network.
#[derive(Debug)]
pub struct LoadAttempt {
    pub store: StoreKind,
    pub endpoint: Result<Url, ClientError>,
}

/// Maps store kinds to endpoints using the configured base URLs.
#[derive(Debug, Clone)]
pub struct StoreResolver {
    config: Config,
}

/// Append `segment` to `base` as one percent-encoded path segment.
fn endpoint_url(base: &str, segment: &str) -> Result<Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidUrl {
        url: base.to_string(),
        reason,
    };
    let mut url = Url::parse(base).map_err(|err| invalid(err.to_string()))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| invalid("cannot be used as a base".to_string()))?;
        path.pop_if_empty();
        path.push(segment);
    }
    Ok(url)
}

impl StoreResolver {
    /// Create a resolver over the given base URLs.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Base URLs and transport settings in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn base_url(&self, store: StoreKind) -> Result<&str, ClientError> {
        self.config
            .base_url(store)
            .ok_or(ClientError::StoreNotConfigured(store))
    }

    /// Resolve the POST endpoint for an explicitly chosen store.
    ///
    /// Private saves get an expiry, defaulting to 30 days; public saves never
    /// do, whatever `expiry` says.
    pub fn save_target(
        &self,
        store: StoreKind,
        expiry: Option<Expiry>,
    ) -> Result<SaveTarget, ClientError> {
        let url = endpoint_url(self.base_url(store)?, POST_PATH_SEGMENT)?;
        let expiry_minutes = store
            .supports_expiry()
            .then(|| expiry.unwrap_or_default().minutes());
        Ok(SaveTarget {
            store,
            url,
            expiry_minutes,
        })
    }

    /// Build the ordered list of GET attempts for `id`.
    pub fn load_plan(&self, id: &PasteId) -> Vec<LoadAttempt> {
        LOAD_ORDER
            .into_iter()
            .map(|store| LoadAttempt {
                store,
                endpoint: self
                    .base_url(store)
                    .and_then(|base| endpoint_url(base, id.as_str())),
            })
            .collect()
    }
}
