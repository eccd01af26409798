use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use rms_core::UserIdentity;
use rms_domain::{Project, ReferenceId};
use tracing::info;

use crate::dto::{CreateProjectRequest, ProjectResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_projects_handler(
    State(state): State<AppState>,
    Extension(_user): Extension<UserIdentity>,
) -> ApiResult<Json<Vec<ProjectResponse>>> {
    let projects = state
        .project_service
        .list_projects()
        .await?
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Ok(Json(projects))
}

pub async fn create_project_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let project = project_from_request(payload);
    let project = state.project_service.create_project(project, &user).await?;

    info!(
        reference_id = %project.reference_id(),
        role = user.role(),
        "project created"
    );

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

fn project_from_request(payload: CreateProjectRequest) -> Project {
    let mut project = Project::new(payload.title, payload.researcher);

    if let Some(reference_id) = payload.reference_id {
        project = project.with_reference_id(ReferenceId::from_string(reference_id));
    }
    if let Some(status) = payload.status {
        project = project.with_status(status);
    }

    project
}
