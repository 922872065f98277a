use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{FilterBar, Header, ProjectCards};
use crate::listing::SortOption;
use crate::store::{provide_project_store, RequestState};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/project-board.css"/>

        <Title text="Project Board"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ProjectsPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ProjectsPage() -> impl IntoView {
    let store = provide_project_store();
    let (sort_option, set_sort_option) = signal(SortOption::default());

    let on_filter_change = move |(name, value): (String, Option<String>)| {
        if name == "sort" {
            set_sort_option.set(value.as_deref().map(SortOption::from).unwrap_or_default());
        } else {
            store.set_filter(&name, value);
        }
    };

    let on_mount = move |()| store.reload();

    let project_count = Signal::derive(move || store.filtered_projects().len());
    let loaded_count = Signal::derive(move || {
        (store.status.get() == RequestState::Fulfilled).then(|| store.projects.with(Vec::len))
    });

    view! {
        <div class="container">
            <Header project_count=loaded_count />

            <section class="projects">
                <FilterBar
                    sort_option=sort_option
                    filters=store.filters
                    tags=Signal::derive(move || store.tags())
                    project_count=project_count
                    on_filter_change=on_filter_change
                />
                <ProjectCards sort_option=sort_option on_mount=on_mount />
            </section>
        </div>
    }
}
