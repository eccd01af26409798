use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use rms_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

pub fn build_router(app_state: AppState, cors_allowed_origin: &str) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route(
            "/api/projects",
            get(handlers::projects::list_projects_handler)
                .post(handlers::projects::create_project_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_auth,
        ));

    let cors_layer = cors::build_cors_layer(cors_allowed_origin)?;

    Ok(Router::new()
        .route("/", get(handlers::index::index_handler))
        .route("/health", get(handlers::health::health_handler))
        .route("/api/login", post(handlers::auth::login_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
