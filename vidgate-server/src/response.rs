//! JSON response envelope
//!
//! Upstream media APIs report their real status in a `code` field of the JSON
//! body; the envelope mirrors that field into the transport status so clients
//! see one consistent code.

use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::{Map, Value};

/// A JSON response whose payload may override its own status code.
///
/// Status resolution: a valid integer `code` key in the payload wins over the
/// status set via [`with_status`](Self::with_status), which wins over 200.
#[derive(Debug, Default)]
pub struct ApiResponse {
    payload: Map<String, Value>,
    status: Option<StatusCode>,
    headers: HeaderMap,
}

impl ApiResponse {
    /// Wrap a payload mapping
    pub fn new(payload: Map<String, Value>) -> Self {
        Self {
            payload,
            status: None,
            headers: HeaderMap::new(),
        }
    }

    /// An empty `{}` body
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the explicit status code (still overridden by a payload `code`)
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach an extra response header, passed through unchanged
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    fn resolved_status(&self) -> StatusCode {
        self.payload
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
            .and_then(|code| StatusCode::from_u16(code).ok())
            .or(self.status)
            .unwrap_or(StatusCode::OK)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = self.resolved_status();
        let mut response = (status, Json(Value::Object(self.payload))).into_response();
        response.headers_mut().extend(self.headers);
        response
    }
}
