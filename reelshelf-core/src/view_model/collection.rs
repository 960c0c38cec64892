//! ViewModel for paginated catalog listings (discover, movies, series)

use std::collections::HashSet;

use reelshelf_model::{Title, TitleId, TitlePage};
use tracing::{debug, info, warn};

use super::{Applied, LoadState};
use crate::api::{ApiResult, CatalogService, TitlesQuery};
use crate::filters::{CatalogScope, FilterConfig};

/// Ticket for one page fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    generation: u64,
    first_page: bool,
    query: TitlesQuery,
}

impl PageRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_first_page(&self) -> bool {
        self.first_page
    }

    pub fn query(&self) -> &TitlesQuery {
        &self.query
    }
}

/// Paginated, filterable listing of titles.
///
/// Changing filters bumps the generation, drops items and cursor, and issues
/// a first-page request. Responses for an older generation are ignored.
#[derive(Debug)]
pub struct CollectionViewModel<S: CatalogService> {
    service: S,
    scope: CatalogScope,
    filters: FilterConfig,
    items: Vec<Title>,
    page_token: Option<String>,
    has_more: bool,
    pages_loaded: usize,
    state: LoadState,
    generation: u64,
}

impl<S: CatalogService> CollectionViewModel<S> {
    pub fn new(service: S, scope: CatalogScope, filters: FilterConfig) -> Self {
        Self {
            service,
            scope,
            filters,
            items: Vec::new(),
            page_token: None,
            has_more: true,
            pages_loaded: 0,
            state: LoadState::Idle,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[Title] {
        &self.items
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn scope(&self) -> CatalogScope {
        self.scope
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    /// Replace the filters and start over from the first page.
    pub fn set_filters(&mut self, filters: FilterConfig) -> PageRequest {
        self.filters = filters;
        self.restart()
    }

    /// Start over from the first page with the current filters.
    pub fn refresh(&mut self) -> PageRequest {
        self.restart()
    }

    fn restart(&mut self) -> PageRequest {
        self.generation += 1;
        self.items.clear();
        self.page_token = None;
        self.has_more = true;
        self.pages_loaded = 0;
        self.state = LoadState::Loading;

        debug!(
            scope = ?self.scope,
            generation = self.generation,
            active_filters = self.filters.active_count(),
            "Collection reset"
        );

        PageRequest {
            generation: self.generation,
            first_page: true,
            query: self.filters.to_query(&self.scope, None),
        }
    }

    /// Ticket for the next page, or `None` when there is nothing to load:
    /// no page yet, no further pages, or a fetch already in flight.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.pages_loaded == 0 || !self.has_more || self.state.is_busy() {
            return None;
        }

        self.state = LoadState::LoadingMore;
        Some(PageRequest {
            generation: self.generation,
            first_page: false,
            query: self
                .filters
                .to_query(&self.scope, self.page_token.clone()),
        })
    }

    /// Fold a response into the view state.
    pub fn apply(
        &mut self,
        request: PageRequest,
        result: ApiResult<TitlePage>,
    ) -> Applied {
        if request.generation != self.generation {
            debug!(
                ticket = request.generation,
                current = self.generation,
                "Dropping stale page response"
            );
            return Applied::Stale;
        }

        let page = match result {
            ApiResult::Success(page) => page,
            ApiResult::Failure(message) => {
                warn!(error = %message, "Page fetch failed");
                self.state = LoadState::Error(message);
                return Applied::Failed;
            }
        };

        self.page_token = page.next_cursor().map(str::to_string);
        self.has_more = self.page_token.is_some();
        self.pages_loaded += 1;
        self.state = LoadState::Loaded;

        if request.first_page {
            self.items = page.titles;
            info!(
                count = self.items.len(),
                has_more = self.has_more,
                "Loaded first page"
            );
            return Applied::Replaced {
                count: self.items.len(),
            };
        }

        let mut known: HashSet<TitleId> =
            self.items.iter().map(|title| title.id.clone()).collect();
        let (mut added, mut skipped) = (0, 0);
        for title in page.titles {
            if known.insert(title.id.clone()) {
                self.items.push(title);
                added += 1;
            } else {
                debug!(id = %title.id, "Skipping duplicate title");
                skipped += 1;
            }
        }
        Applied::Appended { added, skipped }
    }

    /// Reset and fetch the first page.
    pub async fn load_first_page(&mut self) -> Applied {
        let request = self.refresh();
        let result = self.service.list_titles(request.query()).await;
        self.apply(request, result)
    }

    /// Replace the filters and fetch the first page.
    pub async fn apply_filters(&mut self, filters: FilterConfig) -> Applied {
        let request = self.set_filters(filters);
        let result = self.service.list_titles(request.query()).await;
        self.apply(request, result)
    }

    /// Fetch and append the next page; `None` when it was a no-op.
    pub async fn load_more(&mut self) -> Option<Applied> {
        let request = self.begin_load_more()?;
        let result = self.service.list_titles(request.query()).await;
        Some(self.apply(request, result))
    }
}
