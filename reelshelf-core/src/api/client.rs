use std::time::Duration;

use reelshelf_model::{
    AkasList, AwardNominationsPage, BatchTitles, BoxOffice, CertificatesList,
    CompanyCreditsPage, CreditsPage, EpisodesPage, ImagesPage, ParentsGuide,
    ReleaseDatesPage, SearchResults, SeasonsList, Title, TitleId, TitlePage,
    VideosPage,
};
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use super::options::{
    BatchQuery, CreditsOptions, EpisodesOptions, MediaAssetOptions,
    PageOptions, SearchQuery, TitlesQuery,
};
use super::query::{QueryPairs, ToQuery};
use super::result::{ApiError, ApiResult};
use super::routes::{self, utils};

/// HTTP client for the remote metadata service.
///
/// Every operation returns an [`ApiResult`]; transport failures, non-2xx
/// statuses and malformed bodies all end up in the failure branch.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Add a scheme when missing and trim trailing slashes so joined routes
/// never contain `//`.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }

    let local = trimmed.starts_with("localhost")
        || trimmed.starts_with("127.")
        || trimmed.starts_with("[::1]");
    let scheme = if local { "http" } else { "https" };
    let normalized = format!("{scheme}://{trimmed}");
    warn!(
        original = raw,
        normalized = %normalized,
        "Normalized catalog base URL"
    );
    normalized
}

impl CatalogClient {
    /// Client for `base_url` without a request timeout.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(
        base_url: impl AsRef<str>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        Ok(Self::from_parts(client, base_url))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_parts(client: Client, base_url: impl AsRef<str>) -> Self {
        let base_url = normalize_base_url(base_url.as_ref());
        info!(base_url = %base_url, "Creating catalog client");
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a route plus its encoded query string.
    pub fn build_url(&self, route: &str, query: &QueryPairs) -> String {
        let path = utils::with_query(route, query.as_slice());
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ApiError> {
        let parsed = Url::parse(url)
            .map_err(|err| ApiError::InvalidUrl(format!("{url}: {err}")))?;

        debug!(method = "GET", url = %parsed, "Catalog request");
        let response = self
            .client
            .get(parsed)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        route: &str,
        query: QueryPairs,
    ) -> ApiResult<T> {
        let url = self.build_url(route, &query);
        let result = self.execute(&url).await;
        if let Err(err) = &result {
            warn!(url = %url, error = %err, "Catalog request failed");
        }
        result.into()
    }

    async fn fetch_item<T: DeserializeOwned>(
        &self,
        route: &str,
        id: &TitleId,
        query: QueryPairs,
    ) -> ApiResult<T> {
        let path = utils::replace_param(route, "{id}", id);
        self.fetch(&path, query).await
    }

    /// Filtered, sorted, paginated listing.
    pub async fn list_titles(&self, query: &TitlesQuery) -> ApiResult<TitlePage> {
        self.fetch(routes::titles::COLLECTION, query.to_query()).await
    }

    pub async fn get_title(&self, id: &TitleId) -> ApiResult<Title> {
        self.fetch_item(routes::titles::ITEM, id, QueryPairs::new())
            .await
    }

    /// Batch lookup; ids beyond the fifth are dropped with a warning.
    pub async fn get_titles_by_ids(
        &self,
        ids: &[TitleId],
    ) -> ApiResult<BatchTitles> {
        let batch = BatchQuery::new(ids);
        if batch.truncated > 0 {
            warn!(
                requested = ids.len(),
                dropped = batch.truncated,
                "Batch lookup accepts at most 5 title ids"
            );
        }
        self.fetch(routes::titles::BATCH_GET, batch.to_query()).await
    }

    /// Free-text search; `limit` is clamped to `1..=50`.
    pub async fn search_titles(
        &self,
        query: &str,
        limit: u32,
    ) -> ApiResult<SearchResults> {
        let search = SearchQuery::new(query, limit);
        self.fetch(routes::search::TITLES, search.to_query()).await
    }

    pub async fn get_title_credits(
        &self,
        id: &TitleId,
        options: &CreditsOptions,
    ) -> ApiResult<CreditsPage> {
        self.fetch_item(routes::titles::item::CREDITS, id, options.to_query())
            .await
    }

    pub async fn get_title_release_dates(
        &self,
        id: &TitleId,
        options: &PageOptions,
    ) -> ApiResult<ReleaseDatesPage> {
        self.fetch_item(
            routes::titles::item::RELEASE_DATES,
            id,
            options.to_query(),
        )
        .await
    }

    pub async fn get_title_akas(&self, id: &TitleId) -> ApiResult<AkasList> {
        self.fetch_item(routes::titles::item::AKAS, id, QueryPairs::new())
            .await
    }

    pub async fn get_title_seasons(
        &self,
        id: &TitleId,
    ) -> ApiResult<SeasonsList> {
        self.fetch_item(routes::titles::item::SEASONS, id, QueryPairs::new())
            .await
    }

    pub async fn get_title_episodes(
        &self,
        id: &TitleId,
        options: &EpisodesOptions,
    ) -> ApiResult<EpisodesPage> {
        self.fetch_item(routes::titles::item::EPISODES, id, options.to_query())
            .await
    }

    pub async fn get_title_images(
        &self,
        id: &TitleId,
        options: &MediaAssetOptions,
    ) -> ApiResult<ImagesPage> {
        self.fetch_item(routes::titles::item::IMAGES, id, options.to_query())
            .await
    }

    pub async fn get_title_videos(
        &self,
        id: &TitleId,
        options: &MediaAssetOptions,
    ) -> ApiResult<VideosPage> {
        self.fetch_item(routes::titles::item::VIDEOS, id, options.to_query())
            .await
    }

    pub async fn get_title_award_nominations(
        &self,
        id: &TitleId,
        options: &PageOptions,
    ) -> ApiResult<AwardNominationsPage> {
        self.fetch_item(
            routes::titles::item::AWARD_NOMINATIONS,
            id,
            options.to_query(),
        )
        .await
    }

    pub async fn get_title_parents_guide(
        &self,
        id: &TitleId,
    ) -> ApiResult<ParentsGuide> {
        self.fetch_item(
            routes::titles::item::PARENTS_GUIDE,
            id,
            QueryPairs::new(),
        )
        .await
    }

    pub async fn get_title_certificates(
        &self,
        id: &TitleId,
    ) -> ApiResult<CertificatesList> {
        self.fetch_item(
            routes::titles::item::CERTIFICATES,
            id,
            QueryPairs::new(),
        )
        .await
    }

    pub async fn get_title_company_credits(
        &self,
        id: &TitleId,
        options: &CreditsOptions,
    ) -> ApiResult<CompanyCreditsPage> {
        self.fetch_item(
            routes::titles::item::COMPANY_CREDITS,
            id,
            options.to_query(),
        )
        .await
    }

    pub async fn get_title_box_office(
        &self,
        id: &TitleId,
    ) -> ApiResult<BoxOffice> {
        self.fetch_item(routes::titles::item::BOX_OFFICE, id, QueryPairs::new())
            .await
    }
}
