use leptos::prelude::*;

use super::ProjectData;
use crate::listing::parse_instant;

/// Short human date, e.g. "5 Mar 2024". Unparsable input yields `None`.
fn format_date(raw: &str) -> Option<String> {
    parse_instant(raw).map(|instant| instant.format("%-d %b %Y").to_string())
}

#[component]
pub fn ProjectCard(project: ProjectData) -> impl IntoView {
    let ProjectData {
        title,
        description,
        url,
        tags,
        posted_date,
        last_activity_date,
        ..
    } = project;

    let overlay_items: Vec<String> = [
        posted_date
            .as_deref()
            .and_then(format_date)
            .map(|d| format!("posted {d}")),
        last_activity_date
            .as_deref()
            .and_then(format_date)
            .map(|d| format!("active {d}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    let heading = match url {
        Some(url) => view! {
            <h3>
                <a href=url target="_blank" rel="noopener">{title}</a>
            </h3>
        }
        .into_any(),
        None => view! { <h3>{title}</h3> }.into_any(),
    };

    view! {
        <article class="project-card">
            <div class="project-header">{heading}</div>
            {description.map(|d| view! { <p class="project-description">{d}</p> })}
            <div class="project-meta">
                <span class="project-tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="project-badge">{tag}</span> })
                        .collect::<Vec<_>>()}
                </span>
                <span class="project-overlay">{overlay_items.join(" · ")}</span>
            </div>
        </article>
    }
}
