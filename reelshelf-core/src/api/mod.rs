//! Remote metadata client and its supporting types.

pub mod client;
pub mod options;
pub mod query;
pub mod result;
pub mod routes;
pub mod service;

pub use client::{CatalogClient, normalize_base_url};
pub use options::{
    BatchQuery, CreditsOptions, DEFAULT_PAGE_SIZE, EpisodesOptions,
    MAX_BATCH_IDS, MAX_SEARCH_LIMIT, MediaAssetOptions, PageOptions,
    SearchQuery, TitlesQuery,
};
pub use query::{QueryPairs, ToQuery};
pub use result::{ApiError, ApiResult};
pub use service::CatalogService;
