use leptos::prelude::*;

use super::{PageNav, ProjectGrid, ProjectGridEmpty, ProjectsPlaceholder};
use crate::listing::{
    effective_page, error_message, listing_view, page_count, ListingView, SortOption,
    CARDS_PER_PAGE,
};
use crate::store::use_project_store;

/// Run `on_mount` only on an effect's first pass (`prev` is `None`).
fn run_on_first(prev: Option<()>, on_mount: Callback<()>) {
    if prev.is_none() {
        untrack(|| on_mount.run(()));
    }
}

/// Write the page that will actually be shown back into `page`, so a page
/// stranded past the end becomes page one.
fn settle_page(page: RwSignal<usize>, total_pages: usize) {
    let requested = page.get();
    let corrected = effective_page(requested, total_pages);
    if corrected != requested {
        page.set(corrected);
    }
}

/// Sorted, paginated list of the store's filtered projects.
///
/// `on_mount` runs once, on the client, when the list first renders. Callers
/// use it to reset filters and start loading projects.
#[component]
pub fn ProjectCards(
    #[prop(into)] sort_option: Signal<SortOption>,
    #[prop(into)] on_mount: Callback<()>,
) -> impl IntoView {
    let store = use_project_store();
    let page = RwSignal::new(1_usize);

    Effect::new(move |prev: Option<()>| run_on_first(prev, on_mount));

    let filtered = Memo::new(move |_| store.filtered_projects());

    let listing = Memo::new(move |_| {
        let error = store.error.get();
        filtered.with(|projects| {
            listing_view(
                store.status.get(),
                error.as_deref(),
                projects,
                sort_option.get(),
                page.get(),
            )
        })
    });

    // A shrinking list can strand the requested page; fall back to page one
    // so going back to the old list does not jump there again.
    Effect::new(move |_| {
        let total_pages = filtered.with(|projects| page_count(projects.len(), CARDS_PER_PAGE));
        settle_page(page, total_pages);
    });

    let on_page_change = Callback::new(move |target: usize| page.set(target));

    view! {
        <div class="project-cards">
            {move || match listing.get() {
                ListingView::Loading => view! { <ProjectsPlaceholder /> }.into_any(),
                ListingView::Failed(error) => view! {
                    <p class="project-error">{error_message(&error)}</p>
                }
                .into_any(),
                ListingView::Empty => view! { <ProjectGridEmpty /> }.into_any(),
                ListingView::Page(current) => {
                    let controls = current.controls();
                    view! {
                        <ProjectGrid projects=current.items />
                        <PageNav controls=controls on_page_change=on_page_change />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn mount_callback_runs_only_on_first_pass() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let on_mount = Callback::new({
                let calls = Arc::clone(&calls);
                move |()| {
                    calls.fetch_add(1, Ordering::SeqCst);
                }
            });

            run_on_first(None, on_mount);
            run_on_first(Some(()), on_mount);
            run_on_first(Some(()), on_mount);

            assert_eq!(calls.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn stranded_page_resets_itself_to_first() {
        let owner = Owner::new();
        owner.with(|| {
            let page = RwSignal::new(1_usize);

            settle_page(page, page_count(12, CARDS_PER_PAGE));
            page.set(3);
            settle_page(page, page_count(12, CARDS_PER_PAGE));
            assert_eq!(page.get_untracked(), 3);

            settle_page(page, page_count(4, CARDS_PER_PAGE));
            assert_eq!(page.get_untracked(), 1);
        });
    }

    #[test]
    fn page_in_range_is_left_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let page = RwSignal::new(2_usize);
            settle_page(page, page_count(7, CARDS_PER_PAGE));
            assert_eq!(page.get_untracked(), 2);
        });
    }

    #[test]
    fn emptied_list_settles_on_first_page() {
        let owner = Owner::new();
        owner.with(|| {
            let page = RwSignal::new(2_usize);
            settle_page(page, page_count(0, CARDS_PER_PAGE));
            assert_eq!(page.get_untracked(), 1);
        });
    }
}
