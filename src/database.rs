use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;

/// Database connection pool type
pub type DbPool = sqlx::PgPool;

/// Opens the connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections = config.max_connections,
        "Connecting to PostgreSQL"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(config.connection_string().expose_secret())
        .await
}
