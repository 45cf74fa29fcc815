//! Session route handlers: owner login/logout and locale selection.
//!
//! Authentication is a static credential comparison against the configured
//! admin id and password; there are no user accounts.

use axum::{Json, extract::State};
use lumen_core::Language;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::session::SessionFlags;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub id: String,
    pub password: String,
}

/// Language selection form data.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: Language,
}

/// Return the current session flags.
///
/// GET /api/session
pub async fn show(State(state): State<AppState>) -> Json<SessionFlags> {
    Json(state.session().flags())
}

/// Log the owner in.
///
/// POST /api/session/login
#[instrument(skip(state, form), fields(id = %form.id))]
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<SessionFlags>> {
    if !state.session().log_in(&form.id, &form.password) {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }
    Ok(Json(state.session().flags()))
}

/// Log the owner out.
///
/// POST /api/session/logout
pub async fn logout(State(state): State<AppState>) -> Json<SessionFlags> {
    state.session().log_out();
    Json(state.session().flags())
}

/// Select the display language.
///
/// PUT /api/session/language
pub async fn set_language(
    State(state): State<AppState>,
    Json(form): Json<LanguageForm>,
) -> Json<SessionFlags> {
    state.session().set_language(form.language);
    Json(state.session().flags())
}
