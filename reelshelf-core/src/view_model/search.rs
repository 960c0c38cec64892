use reelshelf_model::{SearchResults, Title};
use tracing::{debug, warn};

use super::{Applied, LoadState};
use crate::api::{ApiResult, CatalogService, MAX_SEARCH_LIMIT};

/// Results requested per search.
pub const SEARCH_LIMIT: u32 = 50;

/// Ticket for one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    generation: u64,
    query: String,
    limit: u32,
}

impl SearchRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// Free-text search over the remote catalog.
#[derive(Debug)]
pub struct SearchViewModel<S: CatalogService> {
    service: S,
    query: String,
    results: Vec<Title>,
    state: LoadState,
    generation: u64,
    limit: u32,
}

impl<S: CatalogService> SearchViewModel<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            query: String::new(),
            results: Vec::new(),
            state: LoadState::Idle,
            generation: 0,
            limit: SEARCH_LIMIT,
        }
    }

    /// Request fewer results per search; clamped to `1..=50`.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, MAX_SEARCH_LIMIT);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Title] {
        &self.results
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Start a search for `query`.
    ///
    /// A blank query clears the results and returns `None`; any request
    /// still in flight becomes stale either way.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchRequest> {
        self.generation += 1;
        self.query = query.trim().to_string();

        if self.query.is_empty() {
            self.results.clear();
            self.state = LoadState::Idle;
            return None;
        }

        self.state = LoadState::Loading;
        Some(SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
            limit: self.limit,
        })
    }

    pub fn apply(
        &mut self,
        request: SearchRequest,
        result: ApiResult<SearchResults>,
    ) -> Applied {
        if request.generation != self.generation {
            debug!(query = %request.query, "Dropping stale search response");
            return Applied::Stale;
        }

        match result {
            ApiResult::Success(found) => {
                self.results = found.titles;
                self.state = LoadState::Loaded;
                Applied::Replaced {
                    count: self.results.len(),
                }
            }
            ApiResult::Failure(message) => {
                warn!(query = %request.query, error = %message, "Search failed");
                self.state = LoadState::Error(message);
                Applied::Failed
            }
        }
    }

    /// Run a search end to end; `None` for a blank query.
    pub async fn search(&mut self, query: &str) -> Option<Applied> {
        let request = self.begin_search(query)?;
        let result = self
            .service
            .search_titles(request.query(), request.limit())
            .await;
        Some(self.apply(request, result))
    }
}
