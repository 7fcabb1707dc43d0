//! Save and load round trips against the remote paste stores.

use crate::codec;
use crate::error::ClientError;
use crate::resolver::StoreResolver;
use pastes_core::{
    content_type_to_language, language_to_content_type, parse_content_type, Config, Expiry,
    LoadOutcome, LoadedPaste, PasteId, StoreKind, EXPIRY_HEADER,
};
use reqwest::header::{ACCEPT, CONTENT_ENCODING, CONTENT_TYPE};
use reqwest::Url;
use serde::Deserialize;

/// Body returned by a successful POST.
#[derive(Debug, Deserialize)]
struct SaveResponse {
    key: String,
}

/// Stateless client for the public and private stores.
///
/// Each call is independent: no cache, no retries, and the load fallback is
/// strictly sequential.
#[derive(Debug, Clone)]
pub struct PasteClient {
    http: reqwest::Client,
    resolver: StoreResolver,
}

impl PasteClient {
    /// Build a client with its own HTTP connection pool.
    ///
    /// The configured timeout, if any, is the only timeout applied.
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_http_client(builder.build()?, config))
    }

    /// Build a client from [`Config::from_env`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(Config::from_env())
    }

    /// Reuse an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, config: Config) -> Self {
        Self {
            http,
            resolver: StoreResolver::new(config),
        }
    }

    /// Endpoints and transport settings this client was built with.
    pub fn config(&self) -> &Config {
        self.resolver.config()
    }

    /// Save `content` to the chosen store.
    ///
    /// # Arguments
    /// - `content`: Text to store; empty content is rejected before any request.
    /// - `language`: Language tag used to derive the content type.
    /// - `store`: Target store, chosen by the caller.
    /// - `expiry`: Private-store lifetime; ignored for the public store.
    ///
    /// # Returns
    /// The service-assigned id, or the reason the save failed. Failures are
    /// logged here and never retried.
    pub async fn save(
        &self,
        content: &str,
        language: &str,
        store: StoreKind,
        expiry: Option<Expiry>,
    ) -> Result<PasteId, ClientError> {
        let result = self.try_save(content, language, store, expiry).await;
        match &result {
            Ok(id) => tracing::info!(%store, %id, language, "saved paste"),
            Err(err) => tracing::warn!(%store, language, "save failed: {}", err),
        }
        result
    }

    async fn try_save(
        &self,
        content: &str,
        language: &str,
        store: StoreKind,
        expiry: Option<Expiry>,
    ) -> Result<PasteId, ClientError> {
        if content.is_empty() {
            return Err(ClientError::EmptyContent);
        }

        let target = self.resolver.save_target(store, expiry)?;
        let body = codec::compress(content)?;
        tracing::debug!(
            %store,
            url = %target.url,
            raw_bytes = content.len(),
            compressed_bytes = body.len(),
            "posting paste"
        );

        let mut request = self
            .http
            .post(target.url)
            .header(CONTENT_TYPE, language_to_content_type(language))
            .header(CONTENT_ENCODING, codec::CONTENT_ENCODING)
            .header(ACCEPT, "application/json");
        if let Some(minutes) = target.expiry_minutes {
            request = request.header(EXPIRY_HEADER, minutes.to_string());
        }

        let res = request.body(body).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let parsed: SaveResponse = res.json().await.map_err(|err| {
            if err.is_decode() {
                ClientError::MalformedResponse(err.to_string())
            } else {
                ClientError::Transport(err)
            }
        })?;
        PasteId::new(parsed.key).map_err(|err| ClientError::MalformedResponse(err.to_string()))
    }

    /// Load `id`, trying the private store and then the public one.
    ///
    /// The second request is only sent once the first has failed. A store
    /// without a configured URL counts as a failed attempt.
    ///
    /// # Returns
    /// [`LoadOutcome::Found`] tagged with the store that answered, otherwise
    /// [`LoadOutcome::NotFound`].
    pub async fn load(&self, id: &str) -> LoadOutcome {
        let Ok(id) = PasteId::new(id) else {
            tracing::debug!("load skipped: empty paste id");
            return LoadOutcome::NotFound;
        };

        for attempt in self.resolver.load_plan(&id) {
            let store = attempt.store;
            let result = match attempt.endpoint {
                Ok(url) => self.fetch(url).await,
                Err(err) => Err(err),
            };
            match result {
                Ok((content, language)) => {
                    tracing::info!(%store, %id, bytes = content.len(), "loaded paste");
                    return LoadOutcome::Found(LoadedPaste {
                        content,
                        language,
                        store,
                    });
                }
                Err(err) if err.is_not_found() => {
                    tracing::debug!(%store, %id, "paste not in store");
                }
                Err(ClientError::StoreNotConfigured(_)) => {
                    tracing::debug!(%store, %id, "store not configured; skipping");
                }
                Err(err) => {
                    tracing::warn!(%store, %id, "load attempt failed: {}", err);
                }
            }
        }

        tracing::info!(%id, "paste not found in any store");
        LoadOutcome::NotFound
    }

    async fn fetch(&self, url: Url) -> Result<(String, Option<&'static str>), ClientError> {
        let res = self.http.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        // A success without a readable content type is not trusted as the paste.
        let language = {
            let raw = res
                .headers()
                .get(CONTENT_TYPE)
                .ok_or_else(|| {
                    ClientError::MalformedResponse("missing content type".to_string())
                })?
                .to_str()
                .map_err(|err| ClientError::MalformedResponse(err.to_string()))?;
            if parse_content_type(raw).is_none() {
                return Err(ClientError::MalformedResponse(format!(
                    "unparseable content type '{}'",
                    raw
                )));
            }
            content_type_to_language(raw)
        };
        let content = res.text().await?;
        Ok((content, language))
    }
}
