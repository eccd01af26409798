use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::dto::{LoginRequest, LoginResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let session = state.auth_service.authenticate(payload.email.as_str())?;
    info!(role = %session.role, "issued bearer token");

    Ok(Json(LoginResponse {
        token: session.token,
        role: session.role,
    }))
}
