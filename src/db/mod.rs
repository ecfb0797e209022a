pub mod employee;

use crate::config::Config;
use crate::errors::AppError;
use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn create_pool(config: &Config) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
        .map_err(|err| AppError::DatabaseError(format!("Failed to connect to the database: {}", err)))?;

    info!(
        "Database pool ready (max_connections={}, acquire_timeout={:?})",
        config.max_connections, config.acquire_timeout
    );
    Ok(pool)
}
