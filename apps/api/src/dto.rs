use rms_domain::Project;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health status of one backing dependency.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-dependency-status.ts"
)]
pub struct HealthDependencyStatus {
    pub status: &'static str,
    pub detail: Option<String>,
}

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ready: bool,
    pub database: HealthDependencyStatus,
}

/// Incoming payload for login.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-request.ts"
)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
}

/// Token and role returned by login.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-response.ts"
)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

/// Incoming payload for project creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-project-request.ts"
)]
pub struct CreateProjectRequest {
    pub reference_id: Option<String>,
    pub title: String,
    pub researcher: String,
    pub status: Option<String>,
}

/// API representation of a project.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/project-response.ts"
)]
pub struct ProjectResponse {
    pub reference_id: String,
    pub title: String,
    pub researcher: String,
    pub status: String,
}

impl From<Project> for ProjectResponse {
    fn from(value: Project) -> Self {
        Self {
            reference_id: value.reference_id().as_str().to_owned(),
            title: value.title().to_owned(),
            researcher: value.researcher().to_owned(),
            status: value.status().to_owned(),
        }
    }
}
