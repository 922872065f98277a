//! Database integration tests using sqlx::test
//!
//! These tests require a PostgreSQL database. Each test gets a fresh database
//! with migrations applied.
//!
//! Run with: DATABASE_URL="postgres:///board_test" cargo test --features ssr

use chrono::{TimeZone, Utc};
use sqlx::PgPool;

use super::models::*;
use super::queries::*;

fn new_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        ..NewProject::default()
    }
}

// ============================================================================
// Insert tests
// ============================================================================

#[sqlx::test(migrations = "./migrations")]
async fn insert_project_returns_id(pool: PgPool) {
    let id = insert_project(
        &pool,
        &NewProject {
            title: "River cleanup".to_string(),
            description: Some("Clear the banks after the flood".to_string()),
            url: Some("https://example.org/river".to_string()),
            tags: vec!["outdoors".to_string(), "environment".to_string()],
            posted_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()),
            last_activity_at: Some(Utc::now()),
        },
    )
    .await
    .expect("should insert project");

    assert!(!id.is_nil());
}

#[sqlx::test(migrations = "./migrations")]
async fn insert_project_without_dates(pool: PgPool) {
    let id = insert_project(&pool, &new_project("Undated"))
        .await
        .expect("should insert project");

    let projects = get_all_projects(&pool).await.expect("should query");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, id);
    assert!(projects[0].posted_at.is_none());
    assert!(projects[0].last_activity_at.is_none());
    assert!(projects[0].tags.is_empty());
}

// ============================================================================
// Query tests
// ============================================================================

#[sqlx::test(migrations = "./migrations")]
async fn get_all_projects_empty(pool: PgPool) {
    let projects = get_all_projects(&pool).await.expect("should query");
    assert!(projects.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn get_all_projects_ordered_by_title(pool: PgPool) {
    for title in ["Soup kitchen", "Animal shelter", "Library shelving"] {
        insert_project(&pool, &new_project(title))
            .await
            .expect("should insert project");
    }

    let projects = get_all_projects(&pool).await.expect("should query");
    let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Animal shelter", "Library shelving", "Soup kitchen"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn get_all_projects_round_trips_fields(pool: PgPool) {
    let posted = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    insert_project(
        &pool,
        &NewProject {
            title: "Tutoring".to_string(),
            description: Some("After-school maths".to_string()),
            url: None,
            tags: vec!["education".to_string()],
            posted_at: Some(posted),
            last_activity_at: None,
        },
    )
    .await
    .expect("should insert project");

    let projects = get_all_projects(&pool).await.expect("should query");
    let project = &projects[0];
    assert_eq!(project.description.as_deref(), Some("After-school maths"));
    assert_eq!(project.tags, vec!["education"]);
    assert_eq!(project.posted_at, Some(posted));
}
