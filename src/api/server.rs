//! Listener and shutdown handling.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use super::{routes::router, AppState};

/// Where and how to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Drain in-flight requests on Ctrl-C instead of running until killed.
    pub graceful_shutdown: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            graceful_shutdown: true,
        }
    }
}

/// Bind `config.addr` and serve until shutdown.
pub async fn serve(config: ServerConfig, state: AppState) -> crate::Result<()> {
    let listener = TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "session-vault listening");

    let server = axum::serve(listener, router(state));
    if config.graceful_shutdown {
        server.with_graceful_shutdown(ctrl_c()).await?;
    } else {
        server.await?;
    }

    info!("session-vault stopped");
    Ok(())
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
