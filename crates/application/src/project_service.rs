//! Project registry ports and application service.
//!
//! Owns the two write rules of the registry: only privileged roles may
//! create projects, and new titles must meet the minimum length. The role
//! check always runs first so unprivileged callers learn nothing about
//! field constraints.

use std::sync::Arc;

use async_trait::async_trait;

use rms_core::{AppError, AppResult, UserIdentity};
use rms_domain::{Project, can_create_projects, validate_project_title};

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Repository port for project persistence.
///
/// Adapters map between their own row shape and [`Project`]; any storage
/// surrogate key stays inside the adapter.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persists a new project and returns it unchanged.
    ///
    /// Fails with [`AppError::Internal`] when storage is unreachable or the
    /// reference id already exists.
    async fn insert(&self, project: Project) -> AppResult<Project>;

    /// Returns every stored project in insertion order.
    async fn list_all(&self) -> AppResult<Vec<Project>>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service for listing and creating projects.
#[derive(Clone)]
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    /// Creates a project service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// Returns every registered project, unfiltered.
    pub async fn list_projects(&self) -> AppResult<Vec<Project>> {
        self.repository.list_all().await
    }

    /// Authorizes, validates and persists a new project.
    ///
    /// The candidate already carries its reference id; neither this service
    /// nor the repository assigns one.
    pub async fn create_project(
        &self,
        candidate: Project,
        actor: &UserIdentity,
    ) -> AppResult<Project> {
        if !can_create_projects(actor.role()) {
            return Err(AppError::Forbidden(format!(
                "role '{}' is not allowed to create projects",
                actor.role()
            )));
        }

        validate_project_title(candidate.title())?;

        self.repository.insert(candidate).await
    }
}
