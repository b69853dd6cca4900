//! Client Metrics Service
//!
//! Serves the mock `/user` endpoint and the Prometheus `/metrics` endpoint,
//! then calls `/user` once through the instrumented client so that the
//! `http_client_requests` series is visible on the first scrape.

use client_metrics::config::Config;
use client_metrics::observability::init_metrics_recorder;
use client_metrics::routes;
use client_metrics::services::InstrumentedClient;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "client_metrics=debug,cm=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Client Metrics Service");

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        bind_address = %config.bind_address,
        client_request_timeout_seconds = config.client_request_timeout_seconds,
        "Configuration loaded successfully"
    );

    // Install Prometheus recorder before anything records metrics
    let metrics_handle = init_metrics_recorder().map_err(|e| {
        error!("Failed to initialize metrics recorder: {}", e);
        e
    })?;

    let client = InstrumentedClient::new(config.client_request_timeout())?;

    let app = routes::build_routes(metrics_handle);

    // Parse bind address
    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    info!("Client Metrics Service listening on {}", local_addr);

    tokio::spawn(call_user_endpoint(client, local_addr));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.drain_seconds))
        .await?;

    info!("Client Metrics Service shutdown complete");

    Ok(())
}

/// Call the mock user endpoint once through the instrumented client.
async fn call_user_endpoint(client: InstrumentedClient, addr: SocketAddr) {
    let host = if addr.ip().is_unspecified() {
        "127.0.0.1".to_string()
    } else {
        addr.ip().to_string()
    };
    let url = format!("http://{}:{}/user?id=1", host, addr.port());

    match client.get(&url).await {
        Ok(response) => info!(status = %response.status(), "Mock user endpoint call recorded"),
        Err(e) => warn!(error = %e, "Mock user endpoint call failed"),
    }
}

/// Listens for shutdown signals (SIGTERM, SIGINT).
/// Returns when a shutdown signal is received and drain period is complete.
async fn shutdown_signal(drain_secs: u64) {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT, starting graceful shutdown..."),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, starting graceful shutdown...");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    if drain_secs > 0 {
        warn!("Draining connections for {} seconds...", drain_secs);
        tokio::time::sleep(Duration::from_secs(drain_secs)).await;
        info!("Drain period complete");
    }
}
