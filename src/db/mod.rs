pub mod models;
pub mod queries;

#[cfg(test)]
mod tests;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::error::AppError;

pub use models::*;
pub use queries::*;

/// Initialise the database connection pool
#[tracing::instrument(skip(config))]
pub async fn init_pool(config: Option<&DatabaseConfig>) -> Result<PgPool, AppError> {
    let config = config.ok_or(AppError::MissingDatabase)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
