//! HTTP server initialization and runtime setup.
//!
//! Wires the connection pool, migrations, repositories, services and the
//! Axum server together.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;

use crate::api::routes::app_router;
use crate::application::services::{AddressService, ContactService, UserService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgAddressRepository, PgContactRepository, PgUserRepository,
};
use crate::state::AppState;

/// Builds the shared application state from a pool.
///
/// Also used by the integration tests to run handlers against a test
/// database.
pub fn build_state(pool: sqlx::PgPool) -> AppState {
    let user_repository = Arc::new(PgUserRepository::new());
    let contact_repository = Arc::new(PgContactRepository::new());
    let address_repository = Arc::new(PgAddressRepository::new());

    let user_service = Arc::new(UserService::new(pool.clone(), user_repository));
    let contact_service = Arc::new(ContactService::new(pool.clone(), contact_repository.clone()));
    let address_service = Arc::new(AddressService::new(
        pool,
        contact_repository,
        address_repository,
    ));

    AppState {
        user_service,
        contact_service,
        address_service,
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes the PostgreSQL pool with the configured bounds, applies
/// pending migrations, and serves the application router until the process
/// is stopped.
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
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
    tracing::info!("Migrations applied");

    let state = build_state(pool);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
