//! View models for catalog listings, search and title details.
//!
//! View models own their presentation state and take `&mut self`; network
//! calls go through [`CatalogService`](crate::api::CatalogService). Each
//! fetch is described by a request ticket carrying the generation it was
//! issued under, and a response is only applied while that generation is
//! still current.

pub mod collection;
pub mod detail;
pub mod search;

pub use collection::{CollectionViewModel, PageRequest};
pub use detail::{
    DETAIL_CREDITS_PAGE_SIZE, DETAIL_IMAGES_PAGE_SIZE, TitleDetail,
    load_title_detail,
};
pub use search::{SEARCH_LIMIT, SearchRequest, SearchViewModel};

/// Fetch lifecycle shared by the view models.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadingMore,
    /// Last request failed; previously loaded items are kept.
    Error(String),
}

impl LoadState {
    pub fn is_busy(&self) -> bool {
        matches!(self, LoadState::Loading | LoadState::LoadingMore)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// What happened when a response was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// First page or search results replaced the items.
    Replaced { count: usize },
    /// A later page was appended; `skipped` counts duplicate ids.
    Appended { added: usize, skipped: usize },
    /// The request failed and the view entered [`LoadState::Error`].
    Failed,
    /// The response belonged to an outdated generation and was dropped.
    Stale,
}
