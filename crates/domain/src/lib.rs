//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod project;
mod user;

pub use project::{
    DEFAULT_PROJECT_STATUS, PROJECT_TITLE_MIN_LENGTH, Project, ReferenceId,
    validate_project_title,
};
pub use user::{ROLE_ADMIN, ROLE_RESEARCHER, can_create_projects, role_for_email};
