use sqlx::PgPool;

use super::models::Project;
#[cfg(test)]
use {super::models::NewProject, uuid::Uuid};

// ============================================================================
// Project queries
// ============================================================================

/// Insert a project; used to seed the integration tests.
#[cfg(test)]
pub async fn insert_project(pool: &PgPool, project: &NewProject) -> Result<Uuid, sqlx::Error> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO projects (title, description, url, tags, posted_at, last_activity_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.url)
    .bind(&project.tags)
    .bind(project.posted_at)
    .bind(project.last_activity_at)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Every project, ordered by title. Sorting for display happens client-side.
#[tracing::instrument(skip(pool))]
pub async fn get_all_projects(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, description, url, tags, posted_at, last_activity_at, created_at
        FROM projects
        ORDER BY title ASC, created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await
}
