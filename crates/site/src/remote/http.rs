//! HTTP implementation of the remote document store.
//!
//! Speaks plain JSON over HTTP against one fixed URL: GET retrieves the
//! current document, POST replaces it wholesale. Timeouts are whatever the
//! transport provides; this client adds no retry and no cancellation.

use std::sync::Arc;

use lumen_core::Document;
use tracing::instrument;
use url::Url;

use crate::config::SyncConfig;

use super::{RemoteStore, RemoteStoreError};

/// Client for the shared remote document.
#[derive(Clone)]
pub struct HttpRemoteStore {
    inner: Arc<HttpRemoteStoreInner>,
}

struct HttpRemoteStoreInner {
    client: reqwest::Client,
    document_url: Url,
}

impl HttpRemoteStore {
    /// Create a new client for the configured document URL.
    #[must_use]
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            inner: Arc::new(HttpRemoteStoreInner {
                client: reqwest::Client::new(),
                document_url: config.document_url.clone(),
            }),
        }
    }
}

impl RemoteStore for HttpRemoteStore {
    #[instrument(skip(self), fields(url = %self.inner.document_url))]
    async fn fetch(&self) -> Result<serde_json::Value, RemoteStoreError> {
        let response = self
            .inner
            .client
            .get(self.inner.document_url.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "remote store fetch returned non-success status");
            return Err(RemoteStoreError::Status(status));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "remote store returned a body that is not JSON"
                );
                Err(RemoteStoreError::Decode(e))
            }
        }
    }

    #[instrument(skip(self, document), fields(url = %self.inner.document_url))]
    async fn replace(&self, document: &Document) -> Result<(), RemoteStoreError> {
        let response = self
            .inner
            .client
            .post(self.inner.document_url.clone())
            .json(document)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "remote store replace returned non-success status");
            return Err(RemoteStoreError::Status(status));
        }

        Ok(())
    }
}
