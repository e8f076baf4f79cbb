//! HTTP middleware.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → logging.rs (buffer body if capture enabled,
//!                   build redacted record, emit at info)
//!     → inner service (router + handlers)
//! ```
//!
//! # Design Decisions
//! - The record is emitted synchronously, before dispatch
//! - A body read failure is the only path that short-circuits dispatch

pub mod logging;

pub use logging::log_request;
pub use logging::RequestLog;
