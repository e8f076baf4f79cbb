//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Middleware and handlers emit tracing events
//!     → logging.rs (subscriber: EnvFilter + fmt layer)
//!     → stdout, as human-readable text or JSON lines
//! ```
//!
//! # Design Decisions
//! - The subscriber is built once in main; that call is the single point
//!   of logging configuration for the process
//! - `RUST_LOG` overrides the configured level when set

pub mod logging;
