//! Owner editor route handlers.

use axum::{Json, extract::State};
use lumen_core::Document;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Publish the owner's full document draft.
///
/// PUT /api/document
///
/// Replaces the shared document wholesale (last-writer-wins) and mirrors it
/// to the on-device cache. Returns the published document; the notice
/// timestamp in it is authoritative, not the one the draft carried.
#[instrument(skip(state, draft))]
pub async fn publish(
    State(state): State<AppState>,
    Json(draft): Json<Document>,
) -> Result<Json<Document>> {
    if !state.session().flags().logged_in {
        return Err(AppError::Unauthorized(
            "Owner login required to publish".to_string(),
        ));
    }

    let published = state.engine().publish(draft).await?;
    Ok(Json(published))
}
