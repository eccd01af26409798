//! Application services and ports.

#![forbid(unsafe_code)]

mod auth_service;
mod project_service;

pub use auth_service::{
    AuthService, AuthenticatedSession, EMAIL_CLAIM, ROLE_CLAIM, TokenClaims, TokenProvider,
};
pub use project_service::{ProjectRepository, ProjectService};
