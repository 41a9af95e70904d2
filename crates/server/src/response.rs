//! Indented JSON responses.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::error;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// JSON body rendered with four-space indentation.
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub StatusCode, pub T);

impl<T> IndentedJson<T> {
    /// 200 OK with the given body
    pub fn ok(body: T) -> Self {
        Self(StatusCode::OK, body)
    }

    /// 201 Created with the given body
    pub fn created(body: T) -> Self {
        Self(StatusCode::CREATED, body)
    }
}

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        let IndentedJson(status, body) = self;

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);

        match body.serialize(&mut serializer) {
            Ok(()) => (
                status,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                buf,
            )
                .into_response(),
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
