//! # Onboarding Server
//!
//! Mock HR and directory services for the onboarding assistant, plus the
//! process plumbing to run them.

pub mod api;

use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

pub use api::{directory_router, hr_router, HrState};

/// Bind `addr` and serve `app` until `shutdown` resolves
pub async fn serve(
    name: &'static str,
    addr: SocketAddr,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {} service to {}", name, addr))?;
    tracing::info!("{} service listening on http://{}", name, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .with_context(|| format!("{} service stopped unexpectedly", name))?;

    tracing::info!("{} service shut down", name);
    Ok(())
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
