//! Sorting and pagination for the project list.
//!
//! Everything in here is pure. The list component hands over the filtered
//! projects, the caller's sort option and the page the visitor asked for, and
//! gets back exactly what should be on screen.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::RequestState;

/// Number of project cards shown on one page.
pub const CARDS_PER_PAGE: usize = 5;

/// Ordering applied to the project list before it is paged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    Newest,
    Oldest,
    MostActive,
    /// Keep the order the store delivered.
    #[default]
    Unsorted,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Unsorted,
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::MostActive,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::Oldest => "Oldest",
            SortOption::MostActive => "Most Active",
            SortOption::Unsorted => "Default",
        }
    }
}

impl From<&str> for SortOption {
    /// Anything other than the three known labels means "leave the order alone".
    fn from(value: &str) -> Self {
        match value {
            "Newest" => SortOption::Newest,
            "Oldest" => SortOption::Oldest,
            "Most Active" => SortOption::MostActive,
            _ => SortOption::Unsorted,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Timestamps a record can be ordered by.
pub trait Timeline {
    fn posted_at(&self) -> Option<DateTime<Utc>>;

    fn last_active_at(&self) -> Option<DateTime<Utc>>;
}

/// Parse a timestamp as delivered by the server.
///
/// Accepts RFC 3339, zone-less `YYYY-MM-DDTHH:MM:SS` (read as UTC) and bare
/// `YYYY-MM-DD` dates (midnight UTC). Anything else is treated as missing.
#[must_use]
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Return a sorted copy of `projects`; the input is left untouched.
///
/// The sort is stable. Records with a missing or unparsable key always end up
/// after the dated ones, whatever the direction.
#[must_use]
pub fn sort_projects<T: Timeline + Clone>(projects: &[T], option: SortOption) -> Vec<T> {
    match option {
        SortOption::Newest => sort_by_instant(projects, T::posted_at, true),
        SortOption::Oldest => sort_by_instant(projects, T::posted_at, false),
        SortOption::MostActive => sort_by_instant(projects, T::last_active_at, true),
        SortOption::Unsorted => projects.to_vec(),
    }
}

fn sort_by_instant<T: Clone>(
    projects: &[T],
    key: impl Fn(&T) -> Option<DateTime<Utc>>,
    descending: bool,
) -> Vec<T> {
    let mut keyed: Vec<_> = projects.iter().map(|p| (key(p), p)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_instants(*a, *b, descending));
    keyed.into_iter().map(|(_, p)| p.clone()).collect()
}

fn compare_instants(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    descending: bool,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Number of pages needed for `len` items; zero for an empty list.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// The page that is actually shown for a requested page.
///
/// A page past the end (for example after a filter shrank the list) falls
/// back to the first page instead of showing an empty slice.
#[must_use]
pub fn effective_page(requested: usize, total_pages: usize) -> usize {
    if requested == 0 || requested > total_pages {
        1
    } else {
        requested
    }
}

/// Position within the paged list, as needed by the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub number: usize,
    pub total_pages: usize,
}

impl PageControls {
    /// Target of "previous", or `None` when the control is inert.
    #[must_use]
    pub fn previous(self) -> Option<usize> {
        (self.number > 1).then(|| self.number - 1)
    }

    /// Target of "next", or `None` when the control is inert.
    #[must_use]
    pub fn next(self) -> Option<usize> {
        (self.number < self.total_pages).then(|| self.number + 1)
    }

    #[must_use]
    pub fn status_line(self) -> String {
        format!("Page {} of {}", self.number, self.total_pages)
    }
}

/// One window into a sorted list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn controls(&self) -> PageControls {
        PageControls {
            number: self.number,
            total_pages: self.total_pages,
        }
    }
}

/// Slice `sorted` into the page closest to `requested`.
#[must_use]
pub fn paginate<T: Clone>(sorted: &[T], requested: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = page_count(sorted.len(), page_size);
    let number = effective_page(requested, total_pages);

    let start = (number - 1) * page_size;
    let end = (start + page_size).min(sorted.len());
    let items = sorted
        .get(start..end)
        .map(<[T]>::to_vec)
        .unwrap_or_default();

    Page {
        items,
        number,
        total_pages,
    }
}

/// What the project list renders, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView<T> {
    Loading,
    Failed(String),
    Empty,
    Page(Page<T>),
}

impl<T> ListingView<T> {
    /// Navigation is only shown when there is something to page through.
    #[must_use]
    pub fn shows_navigation(&self) -> bool {
        matches!(self, ListingView::Page(_))
    }
}

/// Decide what the project list shows for the current store state.
#[must_use]
pub fn listing_view<T: Timeline + Clone>(
    status: RequestState,
    error: Option<&str>,
    projects: &[T],
    sort: SortOption,
    requested_page: usize,
) -> ListingView<T> {
    match status {
        RequestState::Pending => ListingView::Loading,
        RequestState::Rejected => ListingView::Failed(error.unwrap_or_default().to_string()),
        RequestState::Fulfilled => {
            let sorted = sort_projects(projects, sort);
            let page = paginate(&sorted, requested_page, CARDS_PER_PAGE);
            if page.items.is_empty() {
                ListingView::Empty
            } else {
                ListingView::Page(page)
            }
        }
    }
}

/// Text shown in place of the list when the fetch was rejected.
#[must_use]
pub fn error_message(error: &str) -> String {
    format!("Error: {error}")
}
