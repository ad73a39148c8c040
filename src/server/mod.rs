//! HTTP server for NIK decoding and visitor counting.
//!
//! Provides these endpoints:
//! - `POST /api/nik/parse`, `GET /api/nik/parse?nik=` - decode a NIK
//! - `POST /api/visitors`, `GET /api/visitors` - record a visit, read visitor stats
//! - `/status` - JSON counters
//! - `/metrics` - Prometheus-compatible metrics

mod handlers;
mod types;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error_handling::InitializationError;
use handlers::{
    metrics_handler, parse_nik_get, parse_nik_post, record_visit, status_handler, visitor_stats,
};

pub use handlers::origin_address;
pub use types::{AppState, NikData, NikExtras, NikResponse};

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/nik/parse", get(parse_nik_get).post(parse_nik_post))
        .route("/api/visitors", get(visitor_stats).post(record_visit))
        .route("/status", get(status_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// A server running on a background task.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: CancellationToken,
    task: JoinHandle<Result<(), anyhow::Error>>,
}

impl ServerHandle {
    /// Address the listener is bound to (useful when binding port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Token that stops the server when cancelled.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Stops accepting connections, lets in-flight requests finish, and waits
    /// for the server task.
    pub async fn shutdown(self) -> Result<(), anyhow::Error> {
        self.shutdown.cancel();
        self.wait().await
    }

    /// Waits until the server stops (after the shutdown token is cancelled).
    pub async fn wait(self) -> Result<(), anyhow::Error> {
        self.task
            .await
            .map_err(|e| anyhow::anyhow!("Server task panicked: {}", e))?
    }
}

/// Binds `address` and serves the router on a background task.
///
/// # Errors
///
/// Returns `InitializationError::BindError` if the address cannot be bound.
pub async fn spawn_server(
    address: &str,
    state: AppState,
) -> Result<ServerHandle, InitializationError> {
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| InitializationError::BindError {
            address: address.to_string(),
            source,
        })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| InitializationError::BindError {
            address: address.to_string(),
            source,
        })?;

    log::info!("Server listening on http://{}/", local_addr);
    log::info!("  - Decode: http://{}/api/nik/parse", local_addr);
    log::info!("  - Visitors: http://{}/api/visitors", local_addr);
    log::info!("  - Status: http://{}/status", local_addr);

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    let app = router(state).into_make_service_with_connect_info::<SocketAddr>();

    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { signal.cancelled().await })
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))
    });

    Ok(ServerHandle {
        local_addr,
        shutdown,
        task,
    })
}
