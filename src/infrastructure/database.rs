//! Connection pool bootstrap.
//!
//! Establishing connectivity is the first, fallible phase of startup: the pool
//! is built, a round-trip is made to prove the backend answers, and pending
//! migrations are applied. Any failure here aborts startup.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Builds the connection pool and verifies the database is reachable.
///
/// # Errors
///
/// Returns an error if no connection can be established, the connectivity
/// check fails, or a migration fails to apply.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Database connection failed")?;

    check_connectivity(&pool).await?;
    tracing::info!("Database connected successfully");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}

/// Runs `SELECT 1` against the pool.
///
/// # Errors
///
/// Returns an error if the query cannot be executed.
pub async fn check_connectivity(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("Database connectivity check failed")?;
    Ok(())
}
