use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use rms_application::AuthService;
use rms_core::{AppError, AppResult, UserIdentity};

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let identity = resolve_identity(&state.auth_service, request.headers())?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Resolves the caller identity from the `Authorization` header.
pub fn resolve_identity(auth_service: &AuthService, headers: &HeaderMap) -> AppResult<UserIdentity> {
    let token = bearer_token(headers)
        .ok_or_else(|| AppError::Unauthorized("bearer token required".to_owned()))?;

    auth_service
        .authorize(token)
        .ok_or_else(|| AppError::Unauthorized("session invalid".to_owned()))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let rest = value.strip_prefix("Bearer ")?;

    Some(rest.split(' ').next().unwrap_or_default())
}
