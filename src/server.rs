//! HTTP server initialization and runtime setup.
//!
//! Handles database pool construction, migrations, dependency wiring, and the
//! Axum server lifecycle.

use crate::application::services::ProductService;
use crate::config::Config;
use crate::infrastructure::auth::{CredentialVerifier, JwksVerifier};
use crate::infrastructure::persistence::PgProductRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Bounded PostgreSQL connection pool (scoped checkout/return per statement)
/// - Schema migrations
/// - Credential verifier against the configured key-set discovery URL
/// - Axum HTTP server with graceful ctrl-c shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let verifier: Arc<dyn CredentialVerifier> = Arc::new(JwksVerifier::new(config.jwks_url()));

    let product_repository = Arc::new(PgProductRepository::new(Arc::new(pool)));
    let product_service = Arc::new(ProductService::new(product_repository));

    let state = AppState::new(product_service, verifier);

    let app = app_router(state, config.catalog_public);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
