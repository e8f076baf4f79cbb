//! Request logging middleware.
//!
//! Every inbound request is summarized into a [`RequestLog`] record and
//! emitted as a single info-level event before dispatch. When body capture
//! is enabled the body is buffered up front and the request is rebuilt from
//! the captured bytes, so the inner service reads identical content from
//! the start.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::http::server::AppState;
use crate::security::redact;

/// Bodies larger than this are excluded from the log record entirely,
/// never truncated.
const MAX_LOGGED_BODY_BYTES: usize = 1024;

/// Structured summary of one inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestLog {
    pub method: String,
    pub path: String,
    pub query: String,
    pub remote_addr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

/// Log the inbound request, then forward it unchanged.
///
/// A body read failure aborts the pipeline: the inner service is not
/// invoked and the caller gets a 500 with a plain-text description.
pub async fn log_request(
    State(state): State<AppState>,
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let (captured, body) = if state.config.capture_request_body {
        match axum::body::to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                // Rebuilding from the captured bytes rewinds the body for
                // the inner service; the clone is a refcount bump.
                let restored = Body::from(bytes.clone());
                (Some(bytes), restored)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to read request body");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("failed to read request body: {err}"),
                )
                    .into_response();
            }
        }
    } else {
        (None, body)
    };

    let record = RequestLog::from_parts(&parts, remote_addr, captured.as_deref());
    record.emit();

    next.run(Request::from_parts(parts, body)).await
}

impl RequestLog {
    /// Build the record for one request.
    ///
    /// `captured` is the buffered body, present only when capture is
    /// enabled. It lands in the record only when non-empty and at most
    /// [`MAX_LOGGED_BODY_BYTES`] long.
    fn from_parts(parts: &Parts, remote_addr: SocketAddr, captured: Option<&[u8]>) -> Self {
        let mut headers = HashMap::new();
        for name in parts.headers.keys() {
            let value = if redact::is_sensitive(name.as_str()) {
                redact::REDACTED.to_string()
            } else {
                // Repeated headers log their first value only.
                parts
                    .headers
                    .get(name)
                    .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                    .unwrap_or_default()
            };
            headers.insert(name.as_str().to_string(), value);
        }

        let request_body = captured
            .filter(|bytes| !bytes.is_empty() && bytes.len() <= MAX_LOGGED_BODY_BYTES)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned());

        Self {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().unwrap_or_default().to_string(),
            remote_addr: remote_addr.to_string(),
            request_body,
            headers: (!headers.is_empty()).then_some(headers),
        }
    }

    /// Emit the record as a single info-level event.
    ///
    /// Absent optional fields are omitted from the event rather than logged
    /// as null.
    fn emit(&self) {
        tracing::info!(
            method = %self.method,
            path = %self.path,
            query = %self.query,
            remote_addr = %self.remote_addr,
            request_body = self.request_body.as_deref(),
            headers = self.headers.as_ref().map(tracing::field::debug),
            "HTTP request received"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use axum::body::Bytes;
    use axum::http::{Method, Request as HttpRequest};
    use axum::routing::any;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::http::server::AppState;

    fn remote() -> SocketAddr {
        "127.0.0.1:4242".parse().unwrap()
    }

    fn parts_for(method: Method, uri: &str, headers: &[(&str, &str)]) -> Parts {
        let mut builder = HttpRequest::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn record_carries_request_line_fields() {
        let parts = parts_for(Method::GET, "/lookup?param=value", &[]);
        let record = RequestLog::from_parts(&parts, remote(), None);

        assert_eq!(record.method, "GET");
        assert_eq!(record.path, "/lookup");
        assert_eq!(record.query, "param=value");
        assert_eq!(record.remote_addr, "127.0.0.1:4242");
        assert_eq!(record.request_body, None);
    }

    #[test]
    fn record_query_is_empty_string_when_absent() {
        let parts = parts_for(Method::GET, "/lookup", &[]);
        let record = RequestLog::from_parts(&parts, remote(), None);
        assert_eq!(record.query, "");
    }

    #[test]
    fn sensitive_headers_are_redacted_in_any_casing() {
        for name in ["Authorization", "AUTHORIZATION", "authorization", "AuThOrIzAtIoN"] {
            let parts = parts_for(
                Method::GET,
                "/secure",
                &[(name, "Bearer token123"), ("User-Agent", "test-agent")],
            );
            let record = RequestLog::from_parts(&parts, remote(), None);

            let headers = record.headers.expect("headers should be present");
            assert_eq!(headers["authorization"], redact::REDACTED);
            assert_eq!(headers["user-agent"], "test-agent");
        }
    }

    #[test]
    fn repeated_headers_log_first_value_only() {
        let parts = parts_for(
            Method::GET,
            "/lookup",
            &[("Accept", "application/json"), ("Accept", "text/html")],
        );
        let record = RequestLog::from_parts(&parts, remote(), None);

        let headers = record.headers.unwrap();
        assert_eq!(headers["accept"], "application/json");
    }

    #[test]
    fn headers_field_is_omitted_when_request_has_none() {
        let parts = parts_for(Method::GET, "/lookup", &[]);
        let record = RequestLog::from_parts(&parts, remote(), None);
        assert_eq!(record.headers, None);
    }

    #[test]
    fn body_at_limit_is_included_verbatim() {
        let body = vec![b'a'; 1024];
        let parts = parts_for(Method::POST, "/webhook", &[]);
        let record = RequestLog::from_parts(&parts, remote(), Some(&body));

        assert_eq!(record.request_body.as_deref(), Some("a".repeat(1024).as_str()));
    }

    #[test]
    fn body_over_limit_is_omitted_not_truncated() {
        let body = vec![b'a'; 1025];
        let parts = parts_for(Method::POST, "/webhook", &[]);
        let record = RequestLog::from_parts(&parts, remote(), Some(&body));

        assert_eq!(record.request_body, None);
    }

    #[test]
    fn empty_body_is_omitted() {
        let parts = parts_for(Method::POST, "/webhook", &[]);
        let record = RequestLog::from_parts(&parts, remote(), Some(&[]));
        assert_eq!(record.request_body, None);
    }

    #[test]
    fn serialized_record_drops_absent_fields() {
        let parts = parts_for(Method::GET, "/lookup", &[]);
        let record = RequestLog::from_parts(&parts, remote(), None);
        let value = serde_json::to_value(&record).unwrap();

        assert!(value.get("request_body").is_none());
        assert!(value.get("headers").is_none());
        assert_eq!(value["method"], "GET");
    }

    // Router-level tests exercising buffer-and-restore through the full
    // middleware stack.

    async fn echo(body: Bytes) -> Bytes {
        body
    }

    fn echo_app(capture: bool) -> Router {
        let config = Config {
            capture_request_body: capture,
            ..Config::default()
        };
        Router::new()
            .route("/{*path}", any(echo))
            .route("/", any(echo))
            .layer(axum::middleware::from_fn_with_state(
                AppState::new(config),
                log_request,
            ))
    }

    fn request_with_body(uri: &str, body: Body) -> Request {
        let mut request = HttpRequest::builder()
            .method(Method::POST)
            .uri(uri)
            .body(body)
            .unwrap();
        request.extensions_mut().insert(ConnectInfo(remote()));
        request
    }

    async fn body_bytes(response: Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn downstream_sees_identical_body_after_capture() {
        for payload in [Vec::new(), b"hello".to_vec(), vec![b'x'; 2048]] {
            let response = echo_app(true)
                .oneshot(request_with_body("/echo", Body::from(payload.clone())))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_bytes(response).await.as_ref(), payload.as_slice());
        }
    }

    #[tokio::test]
    async fn downstream_sees_identical_body_with_capture_disabled() {
        let payload = b"unbuffered".to_vec();
        let response = echo_app(false)
            .oneshot(request_with_body("/echo", Body::from(payload.clone())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await.as_ref(), payload.as_slice());
    }

    #[tokio::test]
    async fn body_read_error_short_circuits_dispatch() {
        let invoked = Arc::new(AtomicBool::new(false));
        let invoked_by_handler = invoked.clone();

        let config = Config::default();
        let app = Router::new()
            .route(
                "/{*path}",
                any(move || {
                    let invoked = invoked_by_handler.clone();
                    async move {
                        invoked.store(true, Ordering::SeqCst);
                        "reached"
                    }
                }),
            )
            .layer(axum::middleware::from_fn_with_state(
                AppState::new(config),
                log_request,
            ));

        let failing = Body::from_stream(futures_util::stream::once(async {
            Err::<Bytes, std::io::Error>(std::io::Error::other("stream reset"))
        }));

        let response = app
            .oneshot(request_with_body("/webhook", failing))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!invoked.load(Ordering::SeqCst));

        let body = body_bytes(response).await;
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("failed to read request body"), "{text}");
    }
}
