//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (accept loop, header-read timeout)
//!     → middleware/logging.rs (buffer body, emit redacted record)
//!     → handlers.rs (/health | catch-all)
//!     → response.rs (JSON payload, content type)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use server::HttpServer;
pub use server::ServerError;
