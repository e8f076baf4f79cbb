//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Build the axum router (two static routes, logging middleware)
//! - Accept connections, bounding how long header parsing may take
//! - Drain in-flight requests on shutdown within a grace period
//!
//! # Lifecycle
//! ```text
//! Created → Listening → ShuttingDown → Stopped
//! ```
//! The shutdown broadcast moves the server out of the accept loop; the
//! listener is closed before draining so no new connections are admitted.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::any;
use axum::Router;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto;
use hyper_util::server::graceful::GracefulShutdown;
use hyper_util::service::TowerToHyperService;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Service;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::http::handlers;
use crate::http::middleware::logging::log_request;

/// Window within which a connection must deliver complete request headers.
const HEADER_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Default bound on connection draining during shutdown.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Errors surfaced by the serving loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),

    #[error("graceful shutdown timed out after {0:?}, dropping remaining connections")]
    ShutdownTimeout(Duration),
}

/// HTTP server for the request logger.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        let state = AppState::new(config);
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum router with all middleware layers.
    ///
    /// Every request matches one of the two handlers; there is no 404 or
    /// 405 outcome.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/health", any(handlers::health))
            .route("/{*path}", any(handlers::universal))
            .route("/", any(handlers::universal))
            .layer(axum::middleware::from_fn_with_state(state, log_request))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server with the default shutdown grace period.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        self.run_with_grace(listener, shutdown, DEFAULT_GRACE_PERIOD)
            .await
    }

    /// Run the server, draining for at most `grace` once shutdown fires.
    ///
    /// Returns [`ServerError::ShutdownTimeout`] when in-flight connections
    /// outlive the grace period; they are dropped at that point. Normal
    /// closure is not an error.
    pub async fn run_with_grace(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
        grace: Duration,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let mut make_service = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        let mut builder = auto::Builder::new(TokioExecutor::new());
        builder
            .http1()
            .timer(TokioTimer::new())
            .header_read_timeout(HEADER_READ_TIMEOUT);
        let graceful = GracefulShutdown::new();

        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    let (stream, remote_addr) = match accepted {
                        Ok(pair) => pair,
                        Err(err) => {
                            tracing::warn!(error = %err, "Failed to accept connection");
                            continue;
                        }
                    };
                    let service = unwrap_infallible(make_service.call(remote_addr).await);
                    let connection = builder
                        .serve_connection_with_upgrades(
                            TokioIo::new(stream),
                            TowerToHyperService::new(service),
                        )
                        .into_owned();
                    let connection = graceful.watch(connection);
                    tokio::spawn(async move {
                        if let Err(err) = connection.await {
                            tracing::debug!(
                                remote_addr = %remote_addr,
                                error = %err,
                                "Connection terminated"
                            );
                        }
                    });
                }
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received, draining connections");
                    break;
                }
            }
        }

        // Stop accepting before draining.
        drop(listener);

        tokio::select! {
            () = graceful.shutdown() => {
                tracing::info!("HTTP server stopped");
                Ok(())
            }
            () = tokio::time::sleep(grace) => Err(ServerError::ShutdownTimeout(grace)),
        }
    }
}

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => match err {},
    }
}
