use leptos::prelude::*;

use crate::listing::PageControls;

/// Class and inline style for a navigation button. Inert buttons keep their
/// place in the layout but are invisible and ignore the pointer.
fn button_look(target: Option<usize>) -> (&'static str, &'static str) {
    match target {
        Some(_) => ("page-nav__btn", ""),
        None => (
            "page-nav__btn page-nav__btn--inert",
            "opacity: 0; pointer-events: none",
        ),
    }
}

#[component]
fn PageButton(
    label: &'static str,
    target: Option<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let (class, style) = button_look(target);

    view! {
        <button
            class=class
            style=style
            disabled=target.is_none()
            aria-hidden=if target.is_none() { "true" } else { "false" }
            on:click=move |_| {
                if let Some(page) = target {
                    on_page_change.run(page);
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
pub fn PageNav(
    controls: PageControls,
    #[prop(into)] on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="page-nav" aria-label="Project pages">
            <PageButton label="PREVIOUS" target=controls.previous() on_page_change=on_page_change />
            <span class="page-nav__status">{controls.status_line()}</span>
            <PageButton label="NEXT" target=controls.next() on_page_change=on_page_change />
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_buttons_are_hidden() {
        let (class, style) = button_look(None);
        assert!(class.contains("page-nav__btn--inert"));
        assert!(style.contains("pointer-events: none"));
    }

    #[test]
    fn active_buttons_have_no_inline_style() {
        assert_eq!(button_look(Some(2)), ("page-nav__btn", ""));
    }
}
