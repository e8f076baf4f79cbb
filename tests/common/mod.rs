//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use request_logger::config::Config;
use request_logger::http::{HttpServer, ServerError};
use request_logger::lifecycle::Shutdown;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    /// Trigger shutdown and wait for the serving loop to finish.
    pub async fn stop(self) -> Result<(), ServerError> {
        self.shutdown.trigger();
        self.handle.await.expect("server task panicked")
    }
}

/// Start the server on an ephemeral port with a test-friendly grace period.
pub async fn spawn_server(config: Config) -> TestServer {
    spawn_server_with_grace(config, Duration::from_secs(5)).await
}

/// Start the server with an explicit shutdown grace period.
pub async fn spawn_server_with_grace(config: Config, grace: Duration) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(config);
    let handle =
        tokio::spawn(async move { server.run_with_grace(listener, receiver, grace).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Config bound to loopback; other fields keep their defaults.
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: "0".to_string(),
        ..Config::default()
    }
}
