//! Client-side project state shared through Leptos context.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::api::get_projects;
use crate::components::ProjectData;

/// Progress of the asynchronous project load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestState {
    /// Nothing loaded yet, or a load is in flight.
    #[default]
    Pending,
    Rejected,
    Fulfilled,
}

/// Active filters narrowing the project list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilters {
    /// Case-insensitive text matched against title and description
    pub query: Option<String>,
    /// Tag the project must carry, compared ignoring case
    pub tag: Option<String>,
}

impl ProjectFilters {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.tag.is_none()
    }

    #[must_use]
    pub fn matches(&self, project: &ProjectData) -> bool {
        let query_matches = self.query.as_deref().is_none_or(|query| {
            let query = query.to_lowercase();
            project.title.to_lowercase().contains(&query)
                || project
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        });

        let tag_matches = self.tag.as_deref().is_none_or(|tag| {
            project
                .tags
                .iter()
                .any(|t| t.eq_ignore_ascii_case(tag))
        });

        query_matches && tag_matches
    }

    /// Apply a change coming from the filter bar. Unknown filter names are ignored.
    pub fn set(&mut self, name: &str, value: Option<String>) {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        match name {
            "query" => self.query = value,
            "tag" => self.tag = value,
            _ => {}
        }
    }
}

/// Projects passing `filters`, in store order.
#[must_use]
pub fn select_filtered_projects(
    projects: &[ProjectData],
    filters: &ProjectFilters,
) -> Vec<ProjectData> {
    if filters.is_empty() {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}

/// Every tag used by `projects`, deduplicated ignoring case and sorted.
#[must_use]
pub fn distinct_tags(projects: &[ProjectData]) -> Vec<String> {
    let mut tags = BTreeMap::new();
    for tag in projects.iter().flat_map(|p| &p.tags) {
        tags.entry(tag.to_lowercase()).or_insert_with(|| tag.clone());
    }
    tags.into_values().collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectStore {
    pub projects: RwSignal<Vec<ProjectData>>,
    pub status: RwSignal<RequestState>,
    pub error: RwSignal<Option<String>>,
    pub filters: RwSignal<ProjectFilters>,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: RwSignal::new(Vec::new()),
            status: RwSignal::new(RequestState::Pending),
            error: RwSignal::new(None),
            filters: RwSignal::new(ProjectFilters::default()),
        }
    }

    pub fn clear_filters(&self) {
        self.filters.set(ProjectFilters::default());
    }

    pub fn set_filter(&self, name: &str, value: Option<String>) {
        self.filters.update(|filters| filters.set(name, value));
    }

    /// Projects passing the active filters. Tracks the underlying signals.
    #[must_use]
    pub fn filtered_projects(&self) -> Vec<ProjectData> {
        self.filters.with(|filters| {
            self.projects
                .with(|projects| select_filtered_projects(projects, filters))
        })
    }

    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.projects.with(|projects| distinct_tags(projects))
    }

    /// Clear the active filters, then load every project from the server.
    pub fn reload(&self) {
        self.reload_with(Self::get_projects_async);
    }

    /// Clear the active filters, then run `fetch`.
    pub fn reload_with(&self, fetch: impl FnOnce(&Self)) {
        self.clear_filters();
        fetch(self);
    }

    /// Load every project from the server.
    ///
    /// The outcome is only observable through `status`, `error` and
    /// `projects`. There is no retry and no way to cancel a load in flight.
    pub fn get_projects_async(&self) {
        let store = *self;
        store.status.set(RequestState::Pending);
        store.error.set(None);

        spawn_local(async move {
            match get_projects().await {
                Ok(projects) => {
                    store.projects.set(projects);
                    store.status.set(RequestState::Fulfilled);
                }
                Err(err) => {
                    leptos::logging::warn!("failed to load projects: {err}");
                    store.error.set(Some(err.to_string()));
                    store.status.set(RequestState::Rejected);
                }
            }
        });
    }
}

/// Create the store and make it available to descendants.
pub fn provide_project_store() -> ProjectStore {
    let store = ProjectStore::new();
    provide_context(store);
    store
}

/// The store provided by an ancestor via [`provide_project_store`].
#[must_use]
pub fn use_project_store() -> ProjectStore {
    expect_context::<ProjectStore>()
}
