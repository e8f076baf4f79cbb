//! Request handlers.
//!
//! Both handlers are stateless and pure apart from the system clock;
//! neither inspects the request body.

use axum::http::{Method, Uri};
use axum::response::Response;

use crate::http::response::{json_response, HealthResponse, UniversalResponse};

/// Health check endpoint. Responds to any method.
pub async fn health() -> Response {
    json_response(&HealthResponse::now())
}

/// Catch-all acknowledgement handler.
///
/// Accepts any method and any path, including custom methods; there is no
/// 404 or 405 outcome.
pub async fn universal(method: Method, uri: Uri) -> Response {
    json_response(&UniversalResponse::now(
        method.to_string(),
        uri.path().to_string(),
    ))
}
