use async_trait::async_trait;
use rms_application::ProjectRepository;
use rms_core::{AppError, AppResult};
use rms_domain::Project;
use sqlx::PgPool;
use tracing::error;

use crate::project_row::ProjectRow;

/// PostgreSQL-backed project repository.
#[derive(Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn insert(&self, project: Project) -> AppResult<Project> {
        sqlx::query(
            r#"
            INSERT INTO projects (ref_id, title, researcher, status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(project.reference_id().as_str())
        .bind(project.title())
        .bind(project.researcher())
        .bind(project.status())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            let is_duplicate = error
                .as_database_error()
                .is_some_and(|database_error| database_error.is_unique_violation());

            if is_duplicate {
                error!(reference_id = %project.reference_id(), "duplicate project reference id");
                AppError::Internal(format!(
                    "project '{}' already exists",
                    project.reference_id()
                ))
            } else {
                AppError::Internal(format!("failed to insert project: {error}"))
            }
        })?;

        Ok(project)
    }

    async fn list_all(&self) -> AppResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, ref_id, title, researcher, status
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list projects: {error}")))?;

        Ok(rows.into_iter().map(ProjectRow::into_domain).collect())
    }
}

#[cfg(test)]
mod tests;
