use chrono::{DateTime, Utc};
use leptos::prelude::*;

use super::ProjectCard;
use crate::listing::{parse_instant, Timeline};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectData {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub tags: Vec<String>,
    pub posted_date: Option<String>,
    pub last_activity_date: Option<String>,
}

impl Timeline for ProjectData {
    fn posted_at(&self) -> Option<DateTime<Utc>> {
        self.posted_date.as_deref().and_then(parse_instant)
    }

    fn last_active_at(&self) -> Option<DateTime<Utc>> {
        self.last_activity_date.as_deref().and_then(parse_instant)
    }
}

#[component]
pub fn ProjectGrid(projects: Vec<ProjectData>) -> impl IntoView {
    view! {
        <ul class="project-list">
            <For
                each=move || projects.clone()
                key=|p| p.id.clone()
                children=move |p| {
                    view! {
                        <li class="project-list__item">
                            <ProjectCard project=p />
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <div class="project-empty">
            <svg viewBox="0 0 200 200" class="project-empty-art" aria-hidden="true">
                <circle cx="100" cy="100" r="70" fill="none" stroke="#e0dbd4" stroke-width="1"/>
                <line x1="150" y1="150" x2="185" y2="185" stroke="#e0dbd4" stroke-width="4"/>
            </svg>
            <p class="project-empty-text">
                "Oops! We don't have any projects matching those filters."
            </p>
        </div>
    }
}
