//! Core library for reelshelf.
//!
//! - [`api`]: HTTP client for the remote metadata service, its route table,
//!   typed request options and the uniform [`ApiResult`](api::ApiResult).
//! - [`filters`]: filter configuration and request derivation.
//! - [`membership`]: locally persisted favorites and watchlist.
//! - [`view_model`]: paginated listing, search and detail view models.
#![allow(missing_docs)]

pub mod api;
pub mod filters;
pub mod membership;
pub mod view_model;

pub use reelshelf_model as model;

pub use api::{ApiError, ApiResult, CatalogClient, CatalogService};
pub use filters::{CatalogScope, FilterConfig, FilterUpdate};
pub use membership::{
    FileStorage, MembershipError, MembershipStore, MemoryStorage,
    StorageError, StoragePort,
};
pub use view_model::{
    Applied, CollectionViewModel, LoadState, SearchViewModel, TitleDetail,
    load_title_detail,
};
