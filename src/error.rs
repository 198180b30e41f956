use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::video::ErrorResponse;

/// Errors surfaced at the HTTP boundary
///
/// Every variant renders as `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Server configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("Could not find video with public_id '{public_id}'. Error: {reason}")]
    AssetNotFound { public_id: String, reason: String },

    #[error("An error occurred during video processing: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::AssetNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, "{}", message);
        } else {
            tracing::warn!(status = %status, "{}", message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
