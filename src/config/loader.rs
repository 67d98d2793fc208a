use std::env;

use crate::config::dto::{AppConfig, DatabaseConfig};
use crate::core::error::AppError;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv()
        .map_err(|err| AppError::configuration(format!("failed to load .env: {err}")))?;

    let port = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid PORT: {err}")))?;

    let db_port = env::var("DB_PORT")
        .unwrap_or_else(|_| "5432".to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid DB_PORT: {err}")))?;

    let database = DatabaseConfig {
        host: require_env("DB_HOST")?,
        port: db_port,
        user: require_env("DB_USER")?,
        password: env::var("DB_PASS").unwrap_or_default(),
        name: require_env("DB_NAME")?,
        ssl_mode: env::var("DB_SSLMODE").unwrap_or_else(|_| "disable".to_string()),
    };

    Ok(AppConfig { port, database })
}

fn require_env(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| AppError::configuration(format!("{key} is required")))
}
