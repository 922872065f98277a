use leptos::prelude::*;

/// Shown while the project list is loading.
#[component]
pub fn ProjectsPlaceholder() -> impl IntoView {
    view! {
        <div class="projects-placeholder" role="status">
            <svg viewBox="0 0 50 50" class="placeholder-spinner" aria-hidden="true">
                <circle
                    cx="25"
                    cy="25"
                    r="20"
                    fill="none"
                    stroke="#8b7355"
                    stroke-width="4"
                    stroke-linecap="round"
                    stroke-dasharray="90 150"
                />
            </svg>
            <p class="placeholder-text">"Projects loading..."</p>
        </div>
    }
}
