//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::remote::HttpRemoteStore;
use crate::session::SessionState;
use crate::store::FileStore;
use crate::sync::{DocumentCache, SyncEngine};

/// The production engine: HTTP remote store, file-backed on-device store.
pub type Engine = SyncEngine<HttpRemoteStore, FileStore>;

/// The production session state.
pub type Session = SessionState<FileStore>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// reconciliation engine, session state, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    engine: Engine,
    session: Session,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Wires the HTTP remote client and the file store under the configured
    /// data directory into the engine and session state. The engine's
    /// document is the schema defaults until `load` runs.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let store = FileStore::new(&config.data_dir);
        let remote = HttpRemoteStore::new(&config.sync);
        let engine = SyncEngine::new(remote, DocumentCache::new(store.clone()));
        let session = SessionState::load(store, config.admin.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                engine,
                session,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the reconciliation engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.inner.engine
    }

    /// Get a reference to the session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }
}
