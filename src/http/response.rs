//! JSON response payloads and serialization.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Liveness payload returned by the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            status: "healthy",
            timestamp: rfc3339_now(),
        }
    }
}

/// Acknowledgement payload returned for every other request.
#[derive(Debug, Serialize)]
pub struct UniversalResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub method: String,
    pub path: String,
}

impl UniversalResponse {
    pub fn now(method: String, path: String) -> Self {
        Self {
            status: "success",
            message: "Request logged successfully",
            timestamp: rfc3339_now(),
            method,
            path,
        }
    }
}

/// Current UTC time in RFC 3339, seconds precision, `Z` suffix.
fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Serialize a payload into a 200 JSON response.
///
/// The payload shapes above are fixed, so serialization failure is not
/// expected in normal operation; if it happens anyway the caller gets a 500
/// with the error text as a plain body.
pub fn json_response<T: Serialize>(payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to encode response");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
