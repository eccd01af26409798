use rms_application::ProjectRepository;
use rms_core::AppError;
use rms_domain::{Project, ReferenceId};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::PostgresProjectRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres project tests: {error}");
    }

    Some(pool)
}

fn unique_project(title: &str) -> Project {
    // Tests share one database, so reference ids stay random.
    Project::new(title, "Dr. Briefs")
}

#[tokio::test]
async fn inserted_project_is_listed_with_identical_fields() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresProjectRepository::new(pool);
    let project = unique_project("Gravity Chamber v2").with_status("Testing");

    let inserted = repository.insert(project.clone()).await;
    assert!(inserted.is_ok());
    assert_eq!(inserted.unwrap_or_else(|_| unreachable!()), project);

    let listed = repository.list_all().await.unwrap_or_default();
    let matches: Vec<&Project> = listed
        .iter()
        .filter(|stored| stored.reference_id() == project.reference_id())
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0], &project);
}

#[tokio::test]
async fn listing_follows_insertion_order() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresProjectRepository::new(pool);
    let first = unique_project("First Postgres Study");
    let second = unique_project("Second Postgres Study");

    assert!(repository.insert(first.clone()).await.is_ok());
    assert!(repository.insert(second.clone()).await.is_ok());

    let listed = repository.list_all().await.unwrap_or_default();
    let first_position = listed.iter().position(|stored| stored == &first);
    let second_position = listed.iter().position(|stored| stored == &second);
    assert!(first_position.is_some());
    assert!(second_position.is_some());
    assert!(first_position < second_position);
}

#[tokio::test]
async fn duplicate_reference_id_is_a_storage_error() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresProjectRepository::new(pool);
    let reference_id = ReferenceId::generate();
    let original = unique_project("Original Study").with_reference_id(reference_id.clone());
    let duplicate = unique_project("Duplicate Study").with_reference_id(reference_id);

    assert!(repository.insert(original).await.is_ok());
    let result = repository.insert(duplicate).await;
    assert!(matches!(result, Err(AppError::Internal(_))));
}
