//! Unified error handling for the HTTP boundary.
//!
//! Provides a unified `AppError` type that logs server-side failures before
//! responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::sync::{OrderError, SyncError};

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Publishing the document failed.
    #[error("sync error: {0}")]
    Sync(#[from] SyncError),

    /// Recording an order failed.
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    /// Caller is not authenticated as the owner.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            Self::Sync(_) | Self::Order(OrderError::RemoteUnavailable(_)) | Self::Internal(_)
        ) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Sync(SyncError::RemoteUnavailable(_))
            | Self::Order(OrderError::RemoteUnavailable(_)) => StatusCode::BAD_GATEWAY,
            Self::Order(OrderError::UnknownProduct(_)) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Sync(_) | Self::Order(OrderError::RemoteUnavailable(_)) => {
                "Sync service unavailable".to_string()
            }
            Self::Order(OrderError::UnknownProduct(id)) => format!("Product not found: {id}"),
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
