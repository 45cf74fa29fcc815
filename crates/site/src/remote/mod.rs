//! Client for the shared remote document store.
//!
//! The remote store is a single logical resource addressed by one fixed URL
//! for the whole application. It supports exactly two operations: retrieve
//! the current value and replace it wholesale. No partial update verb exists,
//! and replace is uncoordinated with other writers - the most recent
//! successful write wins.

mod http;
mod memory;

pub use http::HttpRemoteStore;
pub use memory::InMemoryRemote;

use std::future::Future;

use lumen_core::Document;
use thiserror::Error;

/// Errors raised by the remote document store.
#[derive(Debug, Error)]
pub enum RemoteStoreError {
    /// The HTTP request could not be completed.
    #[error("remote store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote store answered with a non-success status.
    #[error("remote store returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The remote store answered success but the body was not valid JSON.
    #[error("remote store returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The store is unavailable for a reason other than a live HTTP failure
    /// (used by the in-memory substitute to simulate outages).
    #[error("remote store unavailable: {0}")]
    Unavailable(String),
}

/// Port to the shared remote document.
///
/// `fetch` returns the raw stored value; interpreting it as a document is
/// the reconciliation engine's job. `replace` overwrites the whole value.
pub trait RemoteStore: Send + Sync {
    /// Retrieve the current remote value.
    fn fetch(
        &self,
    ) -> impl Future<Output = Result<serde_json::Value, RemoteStoreError>> + Send;

    /// Overwrite the remote value with the serialized document.
    fn replace(
        &self,
        document: &Document,
    ) -> impl Future<Output = Result<(), RemoteStoreError>> + Send;
}
