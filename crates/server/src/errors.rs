//! API errors module

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::response::IndentedJson;

/// Errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Album not found: {id}")]
    AlbumNotFound { id: String },

    #[error("Invalid album payload: {source}")]
    InvalidPayload { source: serde_json::Error },
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AlbumNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidPayload { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Text placed in the `message` field of the response body
    pub fn message(&self) -> String {
        match self {
            ApiError::AlbumNotFound { .. } => "album not found".to_string(),
            ApiError::InvalidPayload { source } => format!("invalid album payload: {}", source),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidPayload { source: err }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("{}", self);
        IndentedJson(self.status(), json!({ "message": self.message() })).into_response()
    }
}
