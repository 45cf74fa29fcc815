//! Order submission route handlers.
//!
//! Open to anonymous visitors; the append itself and its last-writer-wins
//! hazard live in the engine.

use axum::{Json, extract::State, http::StatusCode};
use lumen_core::Order;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::sync::OrderRequest;

/// Submit an order.
///
/// POST /api/orders
#[instrument(skip(state, form), fields(product_id = %form.product_id))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<OrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    // Validate required fields
    if form.customer_name.trim().is_empty()
        || form.customer_contact.trim().is_empty()
        || form.customer_country.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "Name, contact, and country are required.".to_string(),
        ));
    }

    let order = state.engine().submit_order(form).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
