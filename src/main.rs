use tokio::net::TcpListener;

use request_logger::config::Config;
use request_logger::http::HttpServer;
use request_logger::lifecycle::{signals, Shutdown};
use request_logger::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from the environment
    let config = Config::from_env();

    observability::logging::init(&config);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        log_format = %config.log_format,
        capture_request_body = config.capture_request_body,
        "Configuration loaded"
    );

    // Bind TCP listener; a bind failure is fatal to the process
    let bind_address = config.bind_address();
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(
                address = %bind_address,
                error = %err,
                "Failed to bind listener"
            );
            return Err(err.into());
        }
    };

    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    // Create and run the HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    let server_task =
        tokio::spawn(async move { server.run(listener, server_shutdown).await });

    // Wait for SIGINT/SIGTERM, then drain
    signals::wait_for_signal().await;
    shutdown.trigger();

    match server_task.await? {
        Ok(()) => tracing::info!("Shutdown complete"),
        Err(err) => tracing::error!(error = %err, "Server shutdown failed"),
    }

    Ok(())
}
