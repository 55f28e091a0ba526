//! Connection-pool bootstrap.
//!
//! The pool is built lazily and then proven live with a bounded `SELECT 1`
//! before anything is handed to the search service.

use std::time::Duration;

use ginmania_core::config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

/// Upper bound on the startup liveness check.
pub const LIVENESS_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("postgres connection url is required")]
    MissingUrl,
    #[error("invalid postgres connection url: {0}")]
    InvalidUrl(#[source] sqlx::Error),
    #[error("postgres is unreachable: {0}")]
    Unreachable(#[source] sqlx::Error),
    #[error("postgres did not answer within {0:?}")]
    LivenessTimeout(Duration),
}

/// Open a pool sized by `cfg` and wait for the database to answer.
pub async fn connect(cfg: &DatabaseConfig) -> Result<PgPool, ConnectError> {
    let url = cfg.url.trim();
    if url.is_empty() {
        return Err(ConnectError::MissingUrl);
    }
    let options: PgConnectOptions = url.parse().map_err(ConnectError::InvalidUrl)?;

    let mut pool_options = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .max_lifetime(non_zero(cfg.max_lifetime()))
        .idle_timeout(non_zero(cfg.idle_timeout()));
    if let Some(timeout) = non_zero(cfg.acquire_timeout()) {
        pool_options = pool_options.acquire_timeout(timeout);
    }
    let pool = pool_options.connect_lazy_with(options);

    match tokio::time::timeout(LIVENESS_TIMEOUT, sqlx::query("SELECT 1").execute(&pool)).await {
        Ok(Ok(_)) => {}
        Ok(Err(err)) => return Err(ConnectError::Unreachable(err)),
        Err(_) => return Err(ConnectError::LivenessTimeout(LIVENESS_TIMEOUT)),
    }

    tracing::info!(
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "postgres pool ready"
    );
    Ok(pool)
}

// Zero disables the bound.
fn non_zero(d: Duration) -> Option<Duration> {
    (!d.is_zero()).then_some(d)
}
