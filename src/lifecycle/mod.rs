//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → main triggers the Shutdown coordinator
//!
//! Shutdown (shutdown.rs):
//!     Broadcast fires → server stops accepting → drains → exits
//! ```
//!
//! # Design Decisions
//! - Ordered shutdown: stop accept, drain, close
//! - Draining is bounded by a grace period; the server reports a timeout
//!   error if connections outlive it

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
