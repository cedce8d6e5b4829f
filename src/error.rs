use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::api::response::{ApiResponse, ErrorResponse};

/// Tagged request failure. The `IntoResponse` impl below is the single
/// centralized handler: every handler and service propagates with `?` and the
/// status code is decided by variant, never by message content.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request shape violates a declared schema. Always a 400, never
    /// reaches the services.
    #[error("Validation error: {0}")]
    Validation(String),
    /// An identifier or filter resolved to nothing.
    #[error("{0}")]
    NotFound(String),
    /// Document store or serialization failure. Logged, masked externally.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(&format!("Validation error: {}", message))),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(message)),
            )
                .into_response(),
            ApiError::Upstream(error) => {
                log::error!("upstream failure: {:#}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::error("An unexpected error occurred")),
                )
                    .into_response()
            }
        }
    }
}
