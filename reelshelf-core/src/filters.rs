//! Filter configuration for catalog listings.
//!
//! All operations are pure and return a new configuration. The current year
//! is captured once, when the configuration is built, and carried through
//! every derived value so "unset" stays stable for the lifetime of a view.

use std::collections::BTreeSet;

use chrono::Datelike;
use reelshelf_model::{SortBy, SortOrder, TitleType};
use serde::{Deserialize, Serialize};

use crate::api::TitlesQuery;

/// Lower year bound that counts as "no restriction".
pub const MIN_YEAR_BOUND: i32 = 1900;

/// Which slice of the catalog a collection view shows.
///
/// `Movies` and `Series` pin the outgoing `types` parameter regardless of the
/// user's type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogScope {
    #[default]
    All,
    Movies,
    Series,
}

impl CatalogScope {
    pub fn pinned_types(&self) -> Option<&'static [TitleType]> {
        match self {
            CatalogScope::All => None,
            CatalogScope::Movies => Some(&[TitleType::Movie]),
            CatalogScope::Series => {
                Some(&[TitleType::TvSeries, TitleType::TvMiniSeries])
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogScope::All => "Discover",
            CatalogScope::Movies => "Movies",
            CatalogScope::Series => "TV Series",
        }
    }
}

/// A single-field change to a [`FilterConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Types(BTreeSet<TitleType>),
    Genres(BTreeSet<String>),
    SortBy(SortBy),
    SortOrder(SortOrder),
    MinRating(f64),
    MinYear(i32),
    MaxYear(i32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub types: BTreeSet<TitleType>,
    pub genres: BTreeSet<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    /// `0.0` means unset.
    pub min_rating: f64,
    pub min_year: i32,
    pub max_year: i32,
    current_year: i32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::for_year(chrono::Local::now().year())
    }
}

impl FilterConfig {
    /// Canonical defaults with `current_year` as the upper year bound.
    pub fn for_year(current_year: i32) -> Self {
        Self {
            types: BTreeSet::new(),
            genres: BTreeSet::new(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            min_rating: 0.0,
            min_year: MIN_YEAR_BOUND,
            max_year: current_year,
            current_year,
        }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Replace one field; ranges are not validated.
    pub fn update(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Types(types) => next.types = types,
            FilterUpdate::Genres(genres) => next.genres = genres,
            FilterUpdate::SortBy(sort_by) => next.sort_by = sort_by,
            FilterUpdate::SortOrder(order) => next.sort_order = order,
            FilterUpdate::MinRating(rating) => next.min_rating = rating,
            FilterUpdate::MinYear(year) => next.min_year = year,
            FilterUpdate::MaxYear(year) => next.max_year = year,
        }
        next
    }

    pub fn toggle_type(&self, title_type: TitleType) -> Self {
        let mut next = self.clone();
        if !next.types.remove(&title_type) {
            next.types.insert(title_type);
        }
        next
    }

    pub fn toggle_genre(&self, genre: &str) -> Self {
        let mut next = self.clone();
        if !next.genres.remove(genre) {
            next.genres.insert(genre.to_string());
        }
        next
    }

    /// Defaults for the same current year.
    pub fn reset(&self) -> Self {
        Self::for_year(self.current_year)
    }

    fn has_rating(&self) -> bool {
        self.min_rating > 0.0
    }

    fn start_year(&self) -> Option<i32> {
        (self.min_year > MIN_YEAR_BOUND).then_some(self.min_year)
    }

    fn end_year(&self) -> Option<i32> {
        (self.max_year < self.current_year).then_some(self.max_year)
    }

    /// Number of dimensions that differ from default; each counts once no
    /// matter how many values it holds.
    pub fn active_count(&self) -> usize {
        [
            !self.types.is_empty(),
            !self.genres.is_empty(),
            self.has_rating(),
            self.start_year().is_some() || self.end_year().is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_default(&self) -> bool {
        *self == self.reset()
    }

    /// Request parameters for one page of this configuration.
    ///
    /// Fields at their unset sentinel are left out; sort options are always
    /// sent.
    pub fn to_query(
        &self,
        scope: &CatalogScope,
        page_token: Option<String>,
    ) -> TitlesQuery {
        let types = match scope.pinned_types() {
            Some(pinned) => pinned.to_vec(),
            None => self.types.iter().cloned().collect(),
        };

        TitlesQuery {
            types,
            genres: self.genres.iter().cloned().collect(),
            start_year: self.start_year(),
            end_year: self.end_year(),
            min_aggregate_rating: self.has_rating().then_some(self.min_rating),
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            page_token,
            ..TitlesQuery::default()
        }
    }
}
