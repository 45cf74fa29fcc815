//! In-memory implementation of the remote document store.
//!
//! Backs the reconciliation engine tests and the lost-update demonstration:
//! clones share one stored value, so several engine "sessions" can race
//! against the same remote document without a network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use lumen_core::Document;

use super::{RemoteStore, RemoteStoreError};

/// Shared in-memory remote document. Clones observe the same value.
#[derive(Clone, Default)]
pub struct InMemoryRemote {
    value: Arc<Mutex<Option<serde_json::Value>>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryRemote {
    /// Create an empty remote (no document stored yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a remote already holding `value`.
    #[must_use]
    pub fn with_value(value: serde_json::Value) -> Self {
        let remote = Self::new();
        remote.set_value(value);
        remote
    }

    /// Replace the stored raw value directly (bypassing `replace`), e.g. to
    /// stage a partial or malformed document.
    pub fn set_value(&self, value: serde_json::Value) {
        let mut stored = self.value.lock().expect("remote value lock poisoned");
        *stored = Some(value);
    }

    /// The currently stored raw value, if any.
    #[must_use]
    pub fn value(&self) -> Option<serde_json::Value> {
        self.value
            .lock()
            .expect("remote value lock poisoned")
            .clone()
    }

    /// Simulate the store becoming unreachable (or reachable again). While
    /// offline, both `fetch` and `replace` fail.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), RemoteStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(RemoteStoreError::Unavailable(
                "simulated outage".to_string(),
            ));
        }
        Ok(())
    }
}

impl RemoteStore for InMemoryRemote {
    async fn fetch(&self) -> Result<serde_json::Value, RemoteStoreError> {
        self.check_online()?;
        let stored = self.value.lock().expect("remote value lock poisoned");
        stored.clone().ok_or(RemoteStoreError::Status(
            reqwest::StatusCode::NOT_FOUND,
        ))
    }

    async fn replace(&self, document: &Document) -> Result<(), RemoteStoreError> {
        self.check_online()?;
        let value = serde_json::to_value(document)?;
        let mut stored = self.value.lock().expect("remote value lock poisoned");
        *stored = Some(value);
        Ok(())
    }
}
