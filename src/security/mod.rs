//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Logging middleware builds a header map:
//!     → redact.rs classifies each header name
//!     → sensitive values replaced with a fixed placeholder
//!     → everything else logged verbatim (first value only)
//! ```
//!
//! # Design Decisions
//! - Exact name matching, case-insensitive; no prefix or substring rules
//! - Redaction happens before the record reaches the log sink

pub mod redact;

pub use redact::is_sensitive;
pub use redact::REDACTED;
