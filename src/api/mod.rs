//! HTTP API module for the info, health, users and status endpoints.

pub mod handlers;
pub mod routes;

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::utils::shutdown_signal;

pub use handlers::{AppInfo, AppState};
pub use routes::create_router;

/// Bind the listener for the configured host and port.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        %addr,
        version = state.version(),
        environment = state.environment(),
        "HTTP server listening"
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Bind and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: &Config) -> Result<()> {
    let listener = bind(config).await?;
    serve_with_shutdown(listener, AppState::from_config(config), shutdown_signal()).await
}
