//! Test server harness for E2E testing
//!
//! Provides `TestUserServer` for spawning real mock user service instances
//! in tests.

use client_metrics::routes;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Test harness for spawning the mock user service in E2E tests.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_user_flow_e2e() -> Result<()> {
///     let server = TestUserServer::spawn().await?;
///     let client = InstrumentedClient::new(Duration::from_secs(5))?;
///
///     let response = client.get(server.user_url(Some("7"))).await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestUserServer {
    addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl TestUserServer {
    /// Spawn a new test server instance.
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Start the HTTP server in the background
    /// - Serve `/metrics` from a recorder that is not installed globally,
    ///   so tests stay free to install their own recorders
    ///
    /// # Returns
    /// * `Ok(TestUserServer)` - Running server instance
    /// * `Err(anyhow::Error)` - If server spawn fails
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        let metrics_handle = PrometheusBuilder::new().build_recorder().handle();

        // Build routes using the service's real route builder
        let app = routes::build_routes(metrics_handle);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// URL of the mock user endpoint, with an optional `id` query parameter.
    pub fn user_url(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/user?id={}", self.url(), id),
            None => format!("{}/user", self.url()),
        }
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for TestUserServer {
    fn drop(&mut self) {
        // Abort the HTTP server task so the port is released when the test ends.
        self._handle.abort();
    }
}

/// Address of a local port with nothing listening on it.
///
/// Binds an ephemeral port and releases it immediately; connecting to the
/// returned address fails with connection refused.
pub async fn unused_local_addr() -> Result<SocketAddr, anyhow::Error> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind port reservation listener: {}", e))?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_spawns_and_serves_user() -> Result<(), anyhow::Error> {
        let server = TestUserServer::spawn().await?;

        let response = reqwest::get(server.user_url(None)).await?;

        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await?, "user details");
        Ok(())
    }

    #[tokio::test]
    async fn test_user_url_with_id() -> Result<(), anyhow::Error> {
        let server = TestUserServer::spawn().await?;

        assert!(server.user_url(Some("7")).ends_with("/user?id=7"));
        assert!(server.url().starts_with("http://127.0.0.1:"));
        Ok(())
    }
}
