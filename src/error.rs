use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::config::Environment;
use crate::users::dto::ErrorResponse;

/// Error surfaced by the read path. Every store failure, connectivity
/// included, answers 500 here; the generic message stays stable while the
/// detail is carried only in development mode.
#[derive(Debug, Error)]
#[error("Failed to fetch users")]
pub struct ApiError {
    detail: Option<String>,
}

impl ApiError {
    pub fn from_store_error(err: anyhow::Error, env: Environment) -> Self {
        let detail = env.is_development().then(|| format!("{err:#}"));
        Self { detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
            error: Some(
                self.detail
                    .unwrap_or_else(|| "Internal server error".into()),
            ),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
