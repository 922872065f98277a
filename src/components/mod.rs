mod filter_bar;
mod header;
mod page_nav;
mod project_card;
mod project_cards;
mod project_grid;
mod projects_placeholder;

pub use filter_bar::FilterBar;
pub use header::Header;
pub use page_nav::PageNav;
pub use project_card::ProjectCard;
pub use project_cards::ProjectCards;
pub use project_grid::{ProjectData, ProjectGrid, ProjectGridEmpty};
pub use projects_placeholder::ProjectsPlaceholder;
