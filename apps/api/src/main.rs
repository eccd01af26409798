//! Research registry API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use rms_application::{AuthService, ProjectRepository, ProjectService};
use rms_core::AppError;
use rms_infrastructure::{JwtTokenProvider, PostgresProjectRepository};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info, warn};

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    if config.jwt_secret_is_default {
        warn!("JWT_SECRET is not set; signing tokens with the public development secret");
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    if config.migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let project_repository = Arc::new(PostgresProjectRepository::new(pool.clone()));
    report_storage_diagnostic(project_repository.as_ref()).await;

    let token_provider = Arc::new(JwtTokenProvider::new(&config.jwt_secret));

    let app_state = AppState {
        project_service: ProjectService::new(project_repository),
        auth_service: AuthService::new(token_provider),
        postgres_pool: pool,
        index_html_path: config.index_html_path.clone(),
    };

    let app = api_router::build_router(app_state, &config.cors_allowed_origin)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "rms-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))?;

    info!("rms-api shut down");
    Ok(())
}

/// Logs whether stored projects are readable. Startup continues either way.
async fn report_storage_diagnostic(repository: &dyn ProjectRepository) {
    match repository.list_all().await {
        Ok(projects) => info!(records = projects.len(), "project storage check passed"),
        Err(error) => error!(%error, "project storage is not readable"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
