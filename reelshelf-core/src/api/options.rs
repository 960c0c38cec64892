//! Typed option bags for remote requests.

use reelshelf_model::{SortBy, SortOrder, TitleId, TitleType};

use super::query::{QueryPairs, ToQuery};

/// Default page size for per-title sub-resources.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound the remote search endpoint accepts.
pub const MAX_SEARCH_LIMIT: u32 = 50;

/// Maximum number of ids a batch lookup accepts.
pub const MAX_BATCH_IDS: usize = 5;

/// Parameters of the `/titles` listing.
///
/// `min_vote_count`, `sort_by` and `sort_order` carry meaningful defaults and
/// are always sent; every other field is omitted when absent or empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TitlesQuery {
    pub types: Vec<TitleType>,
    pub genres: Vec<String>,
    pub country_codes: Vec<String>,
    pub language_codes: Vec<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub min_vote_count: u64,
    pub max_vote_count: Option<u64>,
    pub min_aggregate_rating: Option<f64>,
    pub max_aggregate_rating: Option<f64>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub page_token: Option<String>,
}

impl Default for TitlesQuery {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            genres: Vec::new(),
            country_codes: Vec::new(),
            language_codes: Vec::new(),
            start_year: None,
            end_year: None,
            min_vote_count: 0,
            max_vote_count: None,
            min_aggregate_rating: None,
            max_aggregate_rating: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            page_token: None,
        }
    }
}

impl TitlesQuery {
    pub fn with_page_token(mut self, token: Option<String>) -> Self {
        self.page_token = token;
        self
    }
}

impl ToQuery for TitlesQuery {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs
            .push_all("types", self.types.iter().map(TitleType::api_name))
            .push_all("genres", &self.genres)
            .push_all("countryCodes", &self.country_codes)
            .push_all("languageCodes", &self.language_codes)
            .push_opt("startYear", self.start_year)
            .push_opt("endYear", self.end_year)
            .push("minVoteCount", self.min_vote_count)
            .push_opt("maxVoteCount", self.max_vote_count)
            .push_opt("minAggregateRating", self.min_aggregate_rating)
            .push_opt("maxAggregateRating", self.max_aggregate_rating)
            .push("sortBy", self.sort_by.api_name())
            .push("sortOrder", self.sort_order.api_name())
            .push_opt("pageToken", self.page_token.as_deref());
        pairs
    }
}

/// Ids for `/titles:batchGet`; only the first [`MAX_BATCH_IDS`] are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchQuery {
    pub title_ids: Vec<TitleId>,
    pub truncated: usize,
}

impl BatchQuery {
    pub fn new(ids: &[TitleId]) -> Self {
        let kept = ids.len().min(MAX_BATCH_IDS);
        Self {
            title_ids: ids[..kept].to_vec(),
            truncated: ids.len() - kept,
        }
    }
}

impl ToQuery for BatchQuery {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_all("titleIds", self.title_ids.iter().map(TitleId::as_str));
        pairs
    }
}

/// `/search/titles` parameters with the limit clamped to `1..=50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub limit: u32,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, limit: u32) -> Self {
        Self {
            query: query.into(),
            limit: limit.clamp(1, MAX_SEARCH_LIMIT),
        }
    }
}

impl ToQuery for SearchQuery {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push("query", &self.query).push("limit", self.limit);
        pairs
    }
}

/// Plain pagination for release dates and award nominations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub page_size: u32,
    pub page_token: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_token: None,
        }
    }
}

impl ToQuery for PageOptions {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs
            .push("pageSize", self.page_size)
            .push_opt("pageToken", self.page_token.as_deref());
        pairs
    }
}

/// Cast/crew and company credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditsOptions {
    pub categories: Vec<String>,
    pub page_size: u32,
    pub page_token: Option<String>,
}

impl Default for CreditsOptions {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_token: None,
        }
    }
}

impl CreditsOptions {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }
}

impl ToQuery for CreditsOptions {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs
            .push_all("categories", &self.categories)
            .push("pageSize", self.page_size)
            .push_opt("pageToken", self.page_token.as_deref());
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodesOptions {
    pub season: Option<String>,
    pub page_size: u32,
    pub page_token: Option<String>,
}

impl Default for EpisodesOptions {
    fn default() -> Self {
        Self {
            season: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_token: None,
        }
    }
}

impl ToQuery for EpisodesOptions {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs
            .push_opt("season", self.season.as_deref())
            .push("pageSize", self.page_size)
            .push_opt("pageToken", self.page_token.as_deref());
        pairs
    }
}

/// Images and videos share the same option shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAssetOptions {
    pub types: Vec<String>,
    pub page_size: u32,
    pub page_token: Option<String>,
}

impl Default for MediaAssetOptions {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_token: None,
        }
    }
}

impl MediaAssetOptions {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }
}

impl ToQuery for MediaAssetOptions {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs
            .push_all("types", &self.types)
            .push("pageSize", self.page_size)
            .push_opt("pageToken", self.page_token.as_deref());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_titles_query_sends_only_meaningful_defaults() {
        let pairs = TitlesQuery::default().to_query();
        assert_eq!(
            pairs.as_slice(),
            &[
                ("minVoteCount", "0".to_string()),
                ("sortBy", "SORT_BY_POPULARITY".to_string()),
                ("sortOrder", "DESC".to_string()),
            ]
        );
    }

    #[test]
    fn titles_query_repeats_array_keys() {
        let query = TitlesQuery {
            types: vec![TitleType::TvSeries, TitleType::TvMiniSeries],
            genres: vec!["Drama".into()],
            start_year: Some(2000),
            ..TitlesQuery::default()
        }
        .with_page_token(Some("next".into()));

        let pairs = query.to_query();
        assert_eq!(pairs.values("types"), vec!["TV_SERIES", "TV_MINI_SERIES"]);
        assert_eq!(pairs.values("genres"), vec!["Drama"]);
        assert_eq!(pairs.values("startYear"), vec!["2000"]);
        assert_eq!(pairs.values("pageToken"), vec!["next"]);
        assert!(!pairs.contains_key("endYear"));
    }

    #[test]
    fn batch_query_keeps_first_five() {
        let ids: Vec<TitleId> =
            (1..=7).map(|n| TitleId::new(format!("tt{n}"))).collect();
        let batch = BatchQuery::new(&ids);
        assert_eq!(batch.truncated, 2);
        assert_eq!(
            batch.to_query().values("titleIds"),
            vec!["tt1", "tt2", "tt3", "tt4", "tt5"]
        );
    }

    #[test]
    fn search_limit_is_clamped() {
        assert_eq!(SearchQuery::new("x", 100).limit, 50);
        assert_eq!(SearchQuery::new("x", 0).limit, 1);
        assert_eq!(SearchQuery::new("x", 20).limit, 20);
    }

    #[test]
    fn sub_resource_options_default_to_twenty() {
        let pairs = MediaAssetOptions::default().to_query();
        assert_eq!(pairs.values("pageSize"), vec!["20"]);
        assert!(!pairs.contains_key("types"));

        let pairs = EpisodesOptions {
            season: Some("2".into()),
            ..EpisodesOptions::default()
        }
        .to_query();
        assert_eq!(pairs.values("season"), vec!["2"]);
    }
}
