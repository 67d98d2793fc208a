use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgPool, PgPoolOptions, PgSslMode};

use crate::config::DatabaseConfig;
use crate::core::error::AppError;

const MAX_CONNECTIONS: u32 = 10;
const MIN_CONNECTIONS: u32 = 5;

// Postgres SQLSTATE for "database already exists".
const DUPLICATE_DATABASE: &str = "42P04";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS words (
    id SERIAL PRIMARY KEY,
    word TEXT NOT NULL,
    palindrome BOOLEAN NOT NULL
)";

fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, AppError> {
    let ssl_mode = config
        .ssl_mode
        .parse::<PgSslMode>()
        .map_err(|err| AppError::configuration(format!("invalid DB_SSLMODE: {err}")))?;

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(ssl_mode))
}

/// Creates the target database if it does not exist yet.
///
/// Connects to the `postgres` maintenance database and issues a
/// `CREATE DATABASE`. The already-exists case is expected and logged at
/// debug; any other failure is logged at warn and left for the pool
/// connection to report if it is a real connectivity problem.
pub async fn ensure_database(config: &DatabaseConfig) {
    let Ok(options) = connect_options(config) else {
        // connect_pool reports configuration errors fatally.
        return;
    };

    let mut conn = match PgConnection::connect_with(&options.database("postgres")).await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::warn!(error = %err, "could not reach maintenance database");
            return;
        }
    };

    let statement = format!("CREATE DATABASE \"{}\"", config.name.replace('"', "\"\""));
    match sqlx::query(&statement).execute(&mut conn).await {
        Ok(_) => tracing::info!(database = %config.name, "created database"),
        Err(err) if is_duplicate_database(&err) => {
            tracing::debug!(database = %config.name, "database already exists");
        }
        Err(err) => tracing::warn!(error = %err, "failed to create database"),
    }
}

fn is_duplicate_database(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(DUPLICATE_DATABASE))
}

/// Opens the shared connection pool. Connections are reused indefinitely.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let options = connect_options(config)?;

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .min_connections(MIN_CONNECTIONS)
        .max_lifetime(None)
        .idle_timeout(None)
        .connect_with(options)
        .await
        .map_err(|err| {
            AppError::configuration(format!("failed to connect to database: {err}"))
        })?;

    tracing::info!(host = %config.host, database = %config.name, "connected to database");
    Ok(pool)
}

pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(SCHEMA)
        .execute(pool)
        .await
        .map_err(|err| AppError::configuration(format!("failed to create schema: {err}")))?;

    Ok(())
}
