use std::fmt::{Display, Formatter};

use rms_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum number of characters a project title needs at creation time.
pub const PROJECT_TITLE_MIN_LENGTH: usize = 4;

/// Status assigned to projects created without an explicit one.
pub const DEFAULT_PROJECT_STATUS: &str = "Active";

/// Externally visible project identifier, assigned by whoever creates the
/// project rather than by storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceId(String);

impl ReferenceId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an identifier that was assigned elsewhere.
    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for ReferenceId {
    fn default() -> Self {
        Self::generate()
    }
}

impl Display for ReferenceId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

impl From<ReferenceId> for String {
    fn from(value: ReferenceId) -> Self {
        value.0
    }
}

/// A research project registry entry.
///
/// Construction never validates; the title rule applies only when a project
/// is created through the application service, and stored rows are trusted
/// on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    reference_id: ReferenceId,
    title: String,
    researcher: String,
    status: String,
}

impl Project {
    /// Creates a new project with a generated reference id and the default status.
    #[must_use]
    pub fn new(title: impl Into<String>, researcher: impl Into<String>) -> Self {
        Self {
            reference_id: ReferenceId::generate(),
            title: title.into(),
            researcher: researcher.into(),
            status: DEFAULT_PROJECT_STATUS.to_owned(),
        }
    }

    /// Rebuilds a project from already-persisted values.
    #[must_use]
    pub fn from_parts(
        reference_id: ReferenceId,
        title: impl Into<String>,
        researcher: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            reference_id,
            title: title.into(),
            researcher: researcher.into(),
            status: status.into(),
        }
    }

    /// Replaces the generated reference id with one chosen by the caller.
    #[must_use]
    pub fn with_reference_id(mut self, reference_id: ReferenceId) -> Self {
        self.reference_id = reference_id;
        self
    }

    /// Overrides the default status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Returns the externally visible identifier.
    #[must_use]
    pub fn reference_id(&self) -> &ReferenceId {
        &self.reference_id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the researcher attribution.
    #[must_use]
    pub fn researcher(&self) -> &str {
        self.researcher.as_str()
    }

    /// Returns the status label.
    #[must_use]
    pub fn status(&self) -> &str {
        self.status.as_str()
    }
}

/// Checks the creation-time title rule.
///
/// Length is counted in characters, not bytes.
pub fn validate_project_title(title: &str) -> AppResult<()> {
    if title.chars().count() < PROJECT_TITLE_MIN_LENGTH {
        return Err(AppError::Validation(format!(
            "project title must be at least {PROJECT_TITLE_MIN_LENGTH} characters"
        )));
    }

    Ok(())
}
