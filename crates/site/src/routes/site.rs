//! Visitor view route handlers.

use axum::{Json, extract::State};
use lumen_core::{Document, Language};
use serde::Serialize;

use crate::state::AppState;

/// Everything the presentation layer needs to render the site.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteView {
    pub document: Document,
    /// True when the document was not loaded from the remote store; the
    /// view shows a non-blocking warning.
    pub degraded: bool,
    pub language: Language,
}

/// Return the active document and sync status.
///
/// GET /api/site
pub async fn show(State(state): State<AppState>) -> Json<SiteView> {
    Json(SiteView {
        document: state.engine().document(),
        degraded: state.engine().degraded(),
        language: state.session().flags().language,
    })
}
