use rms_application::{AuthService, ProjectService};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub project_service: ProjectService,
    pub auth_service: AuthService,
    pub postgres_pool: PgPool,
    pub index_html_path: String,
}
