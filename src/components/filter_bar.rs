use leptos::prelude::*;

use crate::listing::SortOption;
use crate::store::ProjectFilters;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub active: bool,
}

fn sort_options(current: SortOption) -> Vec<FilterOption> {
    SortOption::ALL
        .into_iter()
        .map(|option| FilterOption {
            value: option.label().to_string(),
            label: option.label().to_lowercase(),
            active: option == current,
        })
        .collect()
}

fn tag_options(tags: Vec<String>, active_tag: Option<&str>) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        value: String::new(),
        label: "any".to_string(),
        active: active_tag.is_none(),
    })
    .chain(tags.into_iter().map(|t| FilterOption {
        active: active_tag.is_some_and(|a| a.eq_ignore_ascii_case(&t)),
        label: t.to_lowercase(),
        value: t,
    }))
    .collect()
}

fn filter_group(
    name: &'static str,
    options: Vec<FilterOption>,
    on_filter_change: Callback<(String, Option<String>)>,
) -> impl IntoView {
    view! {
        <div class="filter-group">
            <span class="filter-label">{name}</span>
            <div class="filter-options">
                {options
                    .into_iter()
                    .map(|opt| {
                        let value = opt.value.clone();
                        let class = if opt.active { "filter-btn active" } else { "filter-btn" };
                        view! {
                            <button
                                class=class
                                on:click=move |_| {
                                    let val = if value.is_empty() { None } else { Some(value.clone()) };
                                    on_filter_change.run((name.to_string(), val));
                                }
                            >
                                {opt.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn FilterBar(
    #[prop(into)] sort_option: Signal<SortOption>,
    #[prop(into)] filters: Signal<ProjectFilters>,
    #[prop(into)] tags: Signal<Vec<String>>,
    #[prop(into)] project_count: Signal<usize>,
    #[prop(into)] on_filter_change: Callback<(String, Option<String>)>,
) -> impl IntoView {
    // Collapsed/expanded state for filter groups
    let (is_expanded, set_expanded) = signal(false);

    let current_sort = move || sort_option.get().label().to_lowercase();
    let query = move || filters.with(|f| f.query.clone().unwrap_or_default());

    view! {
        <div class="filter-bar">
            <div class="filter-summary">
                <span class="filter-count">{move || project_count.get()} " projects"</span>
                <span class="filter-current">" · sorted by " {current_sort}</span>
                <input
                    class="filter-search"
                    type="search"
                    placeholder="search projects"
                    prop:value=query
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        on_filter_change.run(("query".to_string(), Some(value)));
                    }
                />
                <button
                    class="filter-toggle"
                    on:click=move |_| set_expanded.update(|v| *v = !*v)
                >
                    {move || if is_expanded.get() { "hide filters" } else { "filter" }}
                </button>
            </div>
            <Show when=move || is_expanded.get()>
                <div class="filter-groups">
                    {move || filter_group("sort", sort_options(sort_option.get()), on_filter_change)}
                    {move || {
                        let options = filters.with(|f| tag_options(tags.get(), f.tag.as_deref()));
                        (options.len() > 1).then(|| filter_group("tag", options, on_filter_change))
                    }}
                </div>
            </Show>
        </div>
    }
}
