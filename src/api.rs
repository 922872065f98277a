use leptos::prelude::*;

use crate::components::ProjectData;

/// Every project in the backing store, ordered by title.
#[server]
pub async fn get_projects() -> Result<Vec<ProjectData>, ServerFnError> {
    use crate::db;
    use crate::error::AppError;

    let pool = use_context::<sqlx::PgPool>()
        .ok_or_else(|| ServerFnError::new("database pool not available"))?;

    let projects = db::get_all_projects(&pool)
        .await
        .map_err(AppError::from)
        .map_err(|e| {
            tracing::error!(error = %e, "failed to load projects");
            ServerFnError::new(e)
        })?;

    tracing::debug!(count = projects.len(), "loaded projects");
    Ok(projects.into_iter().map(ProjectData::from).collect())
}
