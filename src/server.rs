//! HTTP server initialization and runtime setup.
//!
//! Startup happens in two phases. [`connect`] establishes backend connectivity
//! and fails fast; [`serve`] binds the listener and handles requests until a
//! shutdown signal arrives. The pool is closed once in-flight requests drain.

use crate::api::middleware::cors;
use crate::config::Config;
use crate::infrastructure::database;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::net::SocketAddr;

/// Runs both startup phases with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection, connectivity check or migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;
    serve(config, pool).await
}

/// Phase one: establishes backend connectivity.
///
/// # Errors
///
/// Returns an error if the database cannot be reached. No retry is attempted.
pub async fn connect(config: &Config) -> Result<PgPool> {
    database::connect(config).await
}

/// Phase two: serves requests on `config.listen_addr` using `pool`.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve(config: Config, pool: PgPool) -> Result<()> {
    let cors = cors::layer(&config.cors_allowed_origin)?;
    let state = AppState::from_pool(pool.clone(), config.base_url.clone());
    let app = app_router(state, cors);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server is running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down, closing database pool");
    pool.close().await;

    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
