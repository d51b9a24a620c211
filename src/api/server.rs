//! API server lifecycle: bind → spawn background task → return a handle
//! with a shutdown channel. `serve` wraps that for the binary and stops
//! on Ctrl-C.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::clinic_api_router;
use crate::core_state::ClinicState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind API server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("API server I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("API server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Handle to a running API server.
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ApiServer {
    /// Send the shutdown signal. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }

    /// Signal shutdown and wait for in-flight requests to drain.
    pub async fn stop(mut self) -> Result<(), ServerError> {
        self.shutdown();
        self.task.await?;
        Ok(())
    }
}

/// Bind `addr` (port 0 picks an ephemeral port) and start serving the
/// clinic API in a background tokio task.
pub async fn start_api_server(
    core: Arc<ClinicState>,
    addr: SocketAddr,
) -> Result<ApiServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let addr = listener.local_addr()?;

    let app = clinic_api_router(core);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}

/// Serve until Ctrl-C.
pub async fn serve(core: Arc<ClinicState>, addr: SocketAddr) -> Result<(), ServerError> {
    let server = start_api_server(core, addr).await?;
    tracing::info!(addr = %server.addr, "Listening; press Ctrl-C to stop");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C ({e}); shutting down");
    }
    server.stop().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use crate::schedule::DayBoundary;

    fn test_core() -> Arc<ClinicState> {
        Arc::new(ClinicState::in_memory(DayBoundary::Utc).unwrap())
    }

    fn localhost() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    async fn raw_get(addr: SocketAddr, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let server = start_api_server(test_core(), localhost())
            .await
            .expect("server should start");
        assert!(server.addr.port() > 0);

        let response = raw_get(server.addr, "/api/health").await;
        assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");

        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn unknown_route_is_404_over_http() {
        let server = start_api_server(test_core(), localhost())
            .await
            .expect("server should start");

        let response = raw_get(server.addr, "/nonexistent").await;
        assert!(response.starts_with("HTTP/1.1 404"), "got: {response}");

        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_api_server(test_core(), localhost())
            .await
            .expect("server should start");

        server.shutdown();
        server.shutdown(); // Second call should be safe
        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let server = start_api_server(test_core(), localhost())
            .await
            .expect("server should start");

        let err = start_api_server(test_core(), server.addr).await.err().unwrap();
        assert!(matches!(err, ServerError::Bind { .. }));

        server.stop().await.unwrap();
    }
}
