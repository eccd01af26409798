use async_trait::async_trait;
use rms_application::ProjectRepository;
use rms_core::{AppError, AppResult};
use rms_domain::Project;
use tokio::sync::RwLock;

use crate::project_row::ProjectRow;

/// In-memory project repository implementation.
///
/// Keeps rows with their own surrogate keys, like the relational adapter,
/// and enforces the same unique reference id constraint.
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    rows: RwLock<Vec<ProjectRow>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, project: Project) -> AppResult<Project> {
        let mut rows = self.rows.write().await;

        let reference_id = project.reference_id().as_str();
        if rows.iter().any(|row| row.ref_id == reference_id) {
            return Err(AppError::Internal(format!(
                "project '{reference_id}' already exists"
            )));
        }

        let next_id = rows.last().map(|row| row.id + 1).unwrap_or(1);
        rows.push(ProjectRow::from_domain(next_id, &project));

        Ok(project)
    }

    async fn list_all(&self) -> AppResult<Vec<Project>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .cloned()
            .map(ProjectRow::into_domain)
            .collect())
    }
}
