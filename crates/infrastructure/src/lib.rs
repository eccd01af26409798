//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_project_repository;
mod jwt_token_provider;
mod postgres_project_repository;
mod project_row;

pub use in_memory_project_repository::InMemoryProjectRepository;
pub use jwt_token_provider::{DEFAULT_TOKEN_TTL_HOURS, JwtTokenProvider};
pub use postgres_project_repository::PostgresProjectRepository;
