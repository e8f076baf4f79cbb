//! HTTP request acknowledgement and logging service.
//!
//! Accepts any request on any path, emits one redacted structured log
//! record per request, and replies with a fixed JSON acknowledgement.
//!
//! # Architecture Overview
//!
//! ```text
//! Client Request
//!     → http::server      (accept loop, header-read timeout)
//!     → middleware        (buffer & restore body, emit log record)
//!     → router            (/health → health, everything else → universal)
//!     → http::response    (JSON payload, content type)
//!     → Client Response
//!
//! Cross-cutting concerns:
//!     config          environment snapshot, read once at startup
//!     observability   tracing subscriber setup (text or JSON)
//!     security        sensitive-header redaction policy
//!     lifecycle       OS signals, graceful shutdown coordination
//! ```

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::Config;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
