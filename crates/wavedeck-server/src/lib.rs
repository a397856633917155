/// wavedeck server — the HTTP face of `wavedeck-core`.
///
/// This crate contains only routing, request extraction and response
/// mapping. All filesystem logic lives in `wavedeck-core`.
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use wavedeck_core::ServerConfig;

/// Name reported by `/serverInfo`.
pub const SERVER_NAME: &str = "wavedeck-server";

/// Signature string that tells the client it is talking to this server
/// rather than a plain static host.
pub fn signature() -> String {
    format!("{SERVER_NAME} {}", env!("CARGO_PKG_VERSION"))
}

/// Bind the listening socket described by `config`.
pub async fn bind(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = config.bind_addr();
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Serve requests on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    info!("Listening on http://{addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
