//! Integration test support for Lumen.
//!
//! Provides [`RemoteStub`], a real HTTP server standing in for the shared
//! remote document store. Tests point the production [`HttpRemoteStore`]
//! at it and drive full load/publish/order flows, including the simulated
//! outages and the lost-update demonstration.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lumen-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use url::Url;

use lumen_site::config::SyncConfig;
use lumen_site::remote::HttpRemoteStore;
use lumen_site::store::MemoryStore;
use lumen_site::sync::{DocumentCache, SyncEngine};

/// An engine wired like production, but with an in-memory on-device store
/// and the stub server as its remote. One of these per simulated session.
pub type StubEngine = SyncEngine<HttpRemoteStore, MemoryStore>;

#[derive(Debug, Default)]
struct StubState {
    /// The stored document value; `None` answers 404.
    value: Option<serde_json::Value>,
    /// When set, every request answers 500.
    fail: bool,
    /// When set, GET answers this body verbatim with status 200.
    raw_body: Option<String>,
}

/// A stub remote document store listening on an ephemeral local port.
#[derive(Clone)]
pub struct RemoteStub {
    addr: SocketAddr,
    state: Arc<Mutex<StubState>>,
}

impl RemoteStub {
    /// Start the stub server.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound (test environment failure).
    pub async fn spawn() -> Self {
        let state = Arc::new(Mutex::new(StubState::default()));

        let app = Router::new()
            .route("/data", get(fetch_document).post(replace_document))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub server");
        let addr = listener.local_addr().expect("stub server has no address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("stub server error");
        });

        Self { addr, state }
    }

    /// Remote store configuration pointing at this stub.
    #[must_use]
    pub fn sync_config(&self) -> SyncConfig {
        let document_url = Url::parse(&format!("http://{}/data", self.addr))
            .expect("stub URL is valid");
        SyncConfig { document_url }
    }

    /// A fresh engine session against this stub, with its own empty
    /// on-device store.
    #[must_use]
    pub fn engine(&self) -> StubEngine {
        self.engine_with_store(MemoryStore::new())
    }

    /// A fresh engine session with a caller-provided on-device store.
    #[must_use]
    pub fn engine_with_store(&self, store: MemoryStore) -> StubEngine {
        SyncEngine::new(
            HttpRemoteStore::new(&self.sync_config()),
            DocumentCache::new(store),
        )
    }

    /// Stage a raw value as the stored document.
    pub fn set_value(&self, value: serde_json::Value) {
        let mut state = self.state.lock().expect("stub state lock poisoned");
        state.value = Some(value);
        state.raw_body = None;
    }

    /// The currently stored value, if any.
    #[must_use]
    pub fn value(&self) -> Option<serde_json::Value> {
        self.state
            .lock()
            .expect("stub state lock poisoned")
            .value
            .clone()
    }

    /// Make every request fail with HTTP 500 (or stop doing so).
    pub fn set_fail(&self, fail: bool) {
        self.state.lock().expect("stub state lock poisoned").fail = fail;
    }

    /// Make GET answer `body` verbatim with status 200, regardless of the
    /// stored value. Used to simulate a store returning unusable content.
    pub fn set_raw_body(&self, body: impl Into<String>) {
        self.state
            .lock()
            .expect("stub state lock poisoned")
            .raw_body = Some(body.into());
    }
}

async fn fetch_document(State(state): State<Arc<Mutex<StubState>>>) -> Response {
    let state = state.lock().expect("stub state lock poisoned");
    if state.fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "simulated failure").into_response();
    }
    if let Some(raw) = &state.raw_body {
        return raw.clone().into_response();
    }
    match &state.value {
        Some(value) => Json(value.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn replace_document(
    State(state): State<Arc<Mutex<StubState>>>,
    Json(value): Json<serde_json::Value>,
) -> StatusCode {
    let mut state = state.lock().expect("stub state lock poisoned");
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    state.value = Some(value);
    state.raw_body = None;
    StatusCode::OK
}
