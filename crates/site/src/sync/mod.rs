//! The reconciliation engine.
//!
//! Holds the authoritative in-memory document and keeps it, the on-device
//! cache, and the shared remote document in agreement:
//!
//! - [`SyncEngine::load`] runs once per process start: fetch the remote
//!   document, merge it over schema defaults, mirror the result to the
//!   cache. If the remote is unreachable or its value unusable, fall back
//!   to the cache (again merged over defaults), or to plain defaults when
//!   no cache exists, and mark the session degraded.
//! - [`SyncEngine::publish`] replaces the remote document wholesale with
//!   the owner's draft. Last-writer-wins: no merge with the current remote
//!   value, no conflict detection, no retry. A writer who published since
//!   this session loaded is silently overwritten - deliberately.
//! - [`SyncEngine::submit_order`] appends one order to the document as this
//!   session currently holds it (no fresh remote read) and replaces the
//!   remote document. It carries the same last-writer-wins hazard, which is
//!   accepted and demonstrated in the integration tests rather than fixed.
//!
//! Every failure path leaves the in-memory document in a valid,
//! previously-known-good state.

mod cache;

pub use cache::DocumentCache;

use std::sync::RwLock;

use chrono::Utc;
use lumen_core::{Document, DocumentPatch, Order, OrderId, OrderStatus, ProductId};
use serde::Deserialize;
use thiserror::Error;

use crate::remote::{RemoteStore, RemoteStoreError};
use crate::store::KeyValueStore;

/// Where the active document came from at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The remote document was fetched and merged over defaults.
    Remote,
    /// The remote was unusable; the cached document was merged over defaults.
    Cache,
    /// The remote was unusable and no cache existed; plain schema defaults.
    Defaults,
}

/// Result of a load: provenance plus the degraded-sync indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
    pub degraded: bool,
}

/// Errors surfaced when publishing the owner's draft.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote store could not be reached or refused the write.
    #[error("remote store unavailable: {0}")]
    RemoteUnavailable(#[from] RemoteStoreError),
}

/// Errors surfaced when a visitor submits an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The referenced product does not exist in the current document.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The remote store could not be reached or refused the write.
    #[error("remote store unavailable: {0}")]
    RemoteUnavailable(#[from] RemoteStoreError),
}

/// A visitor's order submission: everything but the identifier, timestamp,
/// status, and the denormalized product fields, which the engine fills in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub product_id: ProductId,
    pub customer_name: String,
    pub customer_contact: String,
    pub customer_country: String,
}

struct ActiveState {
    document: Document,
    degraded: bool,
}

/// The reconciliation engine. One per process; shared behind the app state.
pub struct SyncEngine<R, S> {
    remote: R,
    cache: DocumentCache<S>,
    state: RwLock<ActiveState>,
}

impl<R: RemoteStore, S: KeyValueStore> SyncEngine<R, S> {
    /// Create an engine whose active document is the schema defaults until
    /// [`load`](Self::load) runs.
    pub fn new(remote: R, cache: DocumentCache<S>) -> Self {
        Self {
            remote,
            cache,
            state: RwLock::new(ActiveState {
                document: Document::default(),
                degraded: false,
            }),
        }
    }

    /// A copy of the active document.
    #[must_use]
    pub fn document(&self) -> Document {
        self.state
            .read()
            .expect("engine state lock poisoned")
            .document
            .clone()
    }

    /// Whether the active document was loaded from somewhere other than the
    /// remote store.
    #[must_use]
    pub fn degraded(&self) -> bool {
        self.state
            .read()
            .expect("engine state lock poisoned")
            .degraded
    }

    /// Reconcile on startup: remote over defaults, cache fallback, defaults
    /// as the last resort.
    pub async fn load(&self) -> LoadReport {
        match self.remote.fetch().await {
            Ok(value) => match serde_json::from_value::<DocumentPatch>(value) {
                Ok(patch) => {
                    let merged = patch.apply_to(Document::default());
                    self.cache.write(&merged);
                    self.install(merged, false);
                    tracing::info!("loaded document from remote store");
                    LoadReport {
                        source: LoadSource::Remote,
                        degraded: false,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "remote document is malformed, falling back to cache");
                    self.load_from_cache()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "remote store unreachable, falling back to cache");
                self.load_from_cache()
            }
        }
    }

    /// Replace the shared document with the owner's draft.
    ///
    /// On success the draft becomes the active document and is mirrored to
    /// the cache; the published document (with the notice stamped) is
    /// returned. On failure nothing changes anywhere.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::RemoteUnavailable` if the replace fails; no retry
    /// is attempted.
    pub async fn publish(&self, mut candidate: Document) -> Result<Document, SyncError> {
        // The notice timestamp moves only when the owner changed the text;
        // whatever the draft carried for it is overridden either way.
        {
            let state = self.state.read().expect("engine state lock poisoned");
            if candidate.notice.text == state.document.notice.text {
                candidate.notice.updated_at = state.document.notice.updated_at;
            } else {
                candidate.notice.updated_at = Utc::now();
            }
        }

        self.remote.replace(&candidate).await?;

        self.cache.write(&candidate);
        let published = candidate.clone();
        self.state
            .write()
            .expect("engine state lock poisoned")
            .document = candidate;

        tracing::info!("published document to remote store");
        Ok(published)
    }

    /// Append a visitor's order to the document as currently held and
    /// replace the remote document.
    ///
    /// The append works from this session's in-memory copy, not a fresh
    /// remote read; concurrent sessions can therefore overwrite each
    /// other's orders (last-writer-wins).
    ///
    /// # Errors
    ///
    /// Returns `OrderError::UnknownProduct` if the referenced product is not
    /// in the active document (checked before any remote traffic), or
    /// `OrderError::RemoteUnavailable` if the replace fails, in which case
    /// no order is recorded anywhere.
    pub async fn submit_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        let mut document = self.document();

        let product = document
            .product(&request.product_id)
            .ok_or_else(|| OrderError::UnknownProduct(request.product_id.clone()))?;

        let order = Order {
            id: OrderId::generate(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            product_image: if product.image.is_empty() {
                None
            } else {
                Some(product.image.clone())
            },
            customer_name: request.customer_name,
            customer_contact: request.customer_contact,
            customer_country: request.customer_country,
            timestamp: Utc::now(),
            status: OrderStatus::Pending,
        };
        document.orders.push(order.clone());

        self.remote.replace(&document).await?;

        self.cache.write(&document);
        self.state
            .write()
            .expect("engine state lock poisoned")
            .document = document;

        tracing::info!(order_id = %order.id, product_id = %order.product_id, "order recorded");
        Ok(order)
    }

    fn load_from_cache(&self) -> LoadReport {
        match self.cache.read() {
            Some(patch) => {
                let merged = patch.apply_to(Document::default());
                self.install(merged, true);
                tracing::info!("loaded document from on-device cache");
                LoadReport {
                    source: LoadSource::Cache,
                    degraded: true,
                }
            }
            None => {
                self.install(Document::default(), true);
                tracing::info!("no usable cache, starting from schema defaults");
                LoadReport {
                    source: LoadSource::Defaults,
                    degraded: true,
                }
            }
        }
    }

    fn install(&self, document: Document, degraded: bool) {
        let mut state = self.state.write().expect("engine state lock poisoned");
        state.document = document;
        state.degraded = degraded;
    }
}
