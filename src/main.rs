use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use palinstore::config::load_config;
use palinstore::core::db;
use palinstore::core::error::AppError;
use palinstore::features::words::PostgresWordStore;
use palinstore::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_config()?;

    // The target database may already exist; a genuine connectivity problem
    // surfaces as a fatal error from connect_pool below.
    db::ensure_database(&config.database).await;

    let pool = db::connect_pool(&config.database).await?;
    db::ensure_schema(&pool).await?;

    let store = Arc::new(PostgresWordStore::new(pool));
    let app = build_router(AppState::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .init();
}
