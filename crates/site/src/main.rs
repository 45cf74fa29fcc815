//! Lumen site - the serving binary.
//!
//! Serves the visitor view API and the owner editor API on one port.
//!
//! # Architecture
//!
//! - Axum web framework exposing a JSON presentation boundary
//! - One shared remote document (plain JSON over HTTP) as source of truth
//! - File-backed on-device store mirroring the last known document
//! - Reconciliation on startup: remote over defaults, cache fallback
//!
//! The process never fails over a missing or unreachable remote document;
//! it degrades to the cached document (or schema defaults) and says so.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use lumen_site::config::SiteConfig;
use lumen_site::routes;
use lumen_site::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lumen_site=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = SiteConfig::from_env().expect("Failed to load configuration");

    // Build application state
    let state = AppState::new(config.clone());

    // Reconcile with the remote document before serving
    let report = state.engine().load().await;
    if report.degraded {
        tracing::warn!(
            source = ?report.source,
            "starting in degraded sync mode"
        );
    }

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("site listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the remote store.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
