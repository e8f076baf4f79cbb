//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read variables, fall back to defaults)
//!     → Config (immutable snapshot)
//!     → shared via Arc to middleware and handlers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload path
//! - Every variable has a default; an empty value counts as unset
//! - Present-but-unparsable booleans keep the default rather than
//!   collapsing to false

pub mod loader;
pub mod schema;

pub use schema::Config;
pub use schema::LogFormat;
pub use schema::LogLevel;
