//! Typed access to the cached document in the on-device store.

use lumen_core::{Document, DocumentPatch};

use crate::store::{KeyValueStore, keys};

/// The on-device mirror of the last successfully reconciled or published
/// document.
///
/// Reads come back as a [`DocumentPatch`] rather than a full document: a
/// cache written before a schema change may miss fields, and the engine
/// completes those from defaults. Writes are best-effort - a mirror that
/// cannot be written is logged and does not fail the operation that
/// produced the document.
#[derive(Debug, Clone)]
pub struct DocumentCache<S> {
    store: S,
}

impl<S: KeyValueStore> DocumentCache<S> {
    /// Wrap the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the cached document, if a usable one exists.
    ///
    /// An unreadable or unparsable cache is treated the same as an empty
    /// one; the condition is logged, never raised.
    pub fn read(&self) -> Option<DocumentPatch> {
        let raw = match self.store.read(keys::DOCUMENT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read cached document");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(patch) => Some(patch),
            Err(e) => {
                tracing::warn!(error = %e, "cached document is unparsable, ignoring it");
                None
            }
        }
    }

    /// Overwrite the cached document.
    pub fn write(&self, document: &Document) {
        let serialized = match serde_json::to_string(document) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize document for the cache");
                return;
            }
        };

        if let Err(e) = self.store.write(keys::DOCUMENT, &serialized) {
            tracing::warn!(error = %e, "failed to write cached document");
        }
    }
}
