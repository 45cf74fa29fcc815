//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Visitor view
//! GET  /api/site               - Active document + degraded indicator
//!
//! # Session (owner login, locale)
//! GET  /api/session            - Current session flags
//! POST /api/session/login      - Owner login (static credential)
//! POST /api/session/logout     - Owner logout
//! PUT  /api/session/language   - Select display language
//!
//! # Owner editor
//! PUT  /api/document           - Publish the full document draft
//!
//! # Orders (unauthenticated)
//! POST /api/orders             - Submit an order
//! ```

pub mod auth;
pub mod document;
pub mod orders;
pub mod site;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the session routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::show))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/language", put(auth::set_language))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/site", get(site::show))
        .route("/api/document", put(document::publish))
        .route("/api/orders", post(orders::submit))
        .nest("/api/session", session_routes())
}
