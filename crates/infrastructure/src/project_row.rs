//! Stored row shape for projects and its mapping to the domain record.

use rms_domain::{Project, ReferenceId};
use sqlx::FromRow;

/// One row of the `projects` table.
///
/// `id` is the storage surrogate key. It never leaves this crate.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub(crate) struct ProjectRow {
    pub(crate) id: i64,
    pub(crate) ref_id: String,
    pub(crate) title: String,
    pub(crate) researcher: String,
    pub(crate) status: String,
}

impl ProjectRow {
    /// Builds a row for a project, pairing it with a surrogate key.
    pub(crate) fn from_domain(id: i64, project: &Project) -> Self {
        Self {
            id,
            ref_id: project.reference_id().as_str().to_owned(),
            title: project.title().to_owned(),
            researcher: project.researcher().to_owned(),
            status: project.status().to_owned(),
        }
    }

    /// Drops the surrogate key and rebuilds the domain record.
    pub(crate) fn into_domain(self) -> Project {
        Project::from_parts(
            ReferenceId::from_string(self.ref_id),
            self.title,
            self.researcher,
            self.status,
        )
    }
}
