//! Unified request error type.
//!
//! Every handler returns `Result<T, AppError>`, which implements
//! [`axum::response::IntoResponse`] so failures become JSON-body HTTP
//! responses with the right status code. Upstream and transport detail is
//! logged in full; clients get a single descriptive message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All errors that can occur in the request lifecycle.
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller sent malformed input. Rejected at the boundary, before
    /// the relay runs.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Required server configuration is absent. No network call is made.
    #[error("configuration error: {0}")]
    Config(String),

    /// The upstream LLM API answered with a non-success status. Status and
    /// raw body are kept for diagnostics.
    #[error("upstream LLM error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    /// The upstream LLM API could not be reached (timeout, connection
    /// failure, broken body stream).
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // ValidationErrors renders as "field: message" pairs.
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
            AppError::Config(m) => {
                error!(message = %m, "request failed on missing configuration");
                (StatusCode::INTERNAL_SERVER_ERROR, m.clone())
            }
            AppError::Upstream { status, body } => {
                error!(upstream_status = status, body = %body, "upstream LLM call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("LLM error: {body}"),
                )
            }
            AppError::Transport(e) => {
                error!(error = %e, "could not reach upstream LLM");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to reach the LLM provider".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
