use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::storage::catalog::StoreError;
use crate::transport::http::types::ErrorResponse;

/// Failures surfaced to HTTP clients. Missing records map to 404, malformed
/// bodies to 422, everything storage-side to 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("price not found")]
    NotFound,
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound | ApiError::Store(StoreError::NotFound) => {
                (StatusCode::NOT_FOUND, "Price not found".to_string())
            }
            ApiError::InvalidBody(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Store(e) => {
                error!("storage failure: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal storage error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
