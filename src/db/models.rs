use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::components::ProjectData;

/// A project as stored in the `projects` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub tags: Vec<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub last_activity_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub tags: Vec<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub last_activity_at: Option<DateTime<Utc>>,
}

fn to_rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl From<Project> for ProjectData {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title,
            description: project.description,
            url: project.url,
            tags: project.tags,
            posted_date: project.posted_at.map(to_rfc3339),
            last_activity_date: project.last_activity_at.map(to_rfc3339),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::listing::Timeline;

    fn stored() -> Project {
        Project {
            id: Uuid::nil(),
            title: "Community garden".to_string(),
            description: Some("Weekly planting sessions".to_string()),
            url: Some("https://example.org/garden".to_string()),
            tags: vec!["outdoors".to_string()],
            posted_at: Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()),
            last_activity_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn converts_project_to_project_data() {
        let data = ProjectData::from(stored());

        assert_eq!(data.id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(data.title, "Community garden");
        assert_eq!(data.description.as_deref(), Some("Weekly planting sessions"));
        assert_eq!(data.url.as_deref(), Some("https://example.org/garden"));
        assert_eq!(data.tags, vec!["outdoors"]);
        assert_eq!(data.posted_date.as_deref(), Some("2024-01-15T10:30:00Z"));
        assert!(data.last_activity_date.is_none());
    }

    #[test]
    fn converted_dates_parse_back_to_the_same_instant() {
        let project = stored();
        let posted = project.posted_at;
        let data = ProjectData::from(project);

        assert_eq!(data.posted_at(), posted);
        assert!(data.last_active_at().is_none());
    }
}
