use leptos::prelude::*;

#[component]
pub fn Header(
    /// Number of projects currently listed, if known
    #[prop(into)]
    project_count: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header__name">"Project Board"</h1>
        </header>
        <div class="header__meta">
            <span class="header__tagline">"find something to work on"</span>
            {move || project_count.get().map(|count| view! {
                <span class="header__count">{count} " open projects"</span>
            })}
        </div>
    }
}
