//! HTTP server initialization and runtime setup.
//!
//! Selects the credential store, builds the session store and runs the Axum
//! server until Ctrl+C.

use crate::config::Config;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::persistence::{InMemoryUserRepository, PgUserRepository};
use crate::infrastructure::session::InMemorySessionStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The credential store: PostgreSQL (with migrations applied) when
///   `DATABASE_URL` is set, otherwise the built-in in-memory table
/// - The in-memory session store
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let users = build_user_repository(&config).await?;
    let sessions = Arc::new(InMemorySessionStore::new());

    let state = AppState::new(users, sessions);

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn build_user_repository(config: &Config) -> Result<Arc<dyn UserRepository>> {
    let Some(database_url) = &config.database_url else {
        let repo = InMemoryUserRepository::seeded();
        tracing::info!(users = repo.len(), "Using built-in user table");
        return Ok(Arc::new(repo));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(Arc::new(PgUserRepository::new(Arc::new(pool))))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
