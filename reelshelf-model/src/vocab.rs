//! Static lookup tables exposed to presentation: title types, sort fields,
//! sort orders and the fixed genre vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Genre names offered as filter options. Values are sent to the remote
/// service verbatim.
pub const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Comedy",
    "Crime",
    "Drama",
    "Fantasy",
    "Horror",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "Western",
    "Animation",
    "Documentary",
    "Family",
];

/// Kind of catalog entry as reported by the remote service.
///
/// Unknown wire values are preserved in [`TitleType::Other`] so records
/// round-trip through local storage unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum TitleType {
    Movie,
    TvSeries,
    TvMiniSeries,
    TvSpecial,
    TvMovie,
    Short,
    Video,
    VideoGame,
    Other(String),
}

impl TitleType {
    pub fn all() -> &'static [TitleType] {
        use TitleType::*;
        &[
            Movie,
            TvSeries,
            TvMiniSeries,
            TvSpecial,
            TvMovie,
            Short,
            Video,
            VideoGame,
        ]
    }

    pub fn api_name(&self) -> &str {
        match self {
            TitleType::Movie => "MOVIE",
            TitleType::TvSeries => "TV_SERIES",
            TitleType::TvMiniSeries => "TV_MINI_SERIES",
            TitleType::TvSpecial => "TV_SPECIAL",
            TitleType::TvMovie => "TV_MOVIE",
            TitleType::Short => "SHORT",
            TitleType::Video => "VIDEO",
            TitleType::VideoGame => "VIDEO_GAME",
            TitleType::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> String {
        self.api_name().replace('_', " ")
    }

    /// Matches `TV_SERIES`, `tv_series` and `tvSeries` alike.
    fn from_api_name(raw: &str) -> Option<TitleType> {
        let squash = |s: &str| -> String {
            s.chars()
                .filter(|c| *c != '_')
                .map(|c| c.to_ascii_lowercase())
                .collect()
        };
        let wanted = squash(raw);
        TitleType::all()
            .iter()
            .find(|t| squash(t.api_name()) == wanted)
            .cloned()
    }
}

impl From<String> for TitleType {
    fn from(value: String) -> Self {
        TitleType::from_api_name(&value).unwrap_or(TitleType::Other(value))
    }
}

impl From<TitleType> for String {
    fn from(value: TitleType) -> Self {
        match value {
            TitleType::Other(raw) => raw,
            known => known.api_name().to_string(),
        }
    }
}

impl FromStr for TitleType {
    type Err = ModelError;

    /// Parses user input; only the known vocabulary is accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', ' '], "_");
        TitleType::from_api_name(&normalized)
            .ok_or_else(|| ModelError::UnknownTitleType(s.to_string()))
    }
}

impl fmt::Display for TitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Remote sort fields for `/titles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortBy {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "SORT_BY_POPULARITY"))]
    Popularity,
    #[cfg_attr(feature = "serde", serde(rename = "SORT_BY_RELEASE_DATE"))]
    ReleaseDate,
    #[cfg_attr(feature = "serde", serde(rename = "SORT_BY_USER_RATING"))]
    UserRating,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "SORT_BY_USER_RATING_COUNT")
    )]
    UserRatingCount,
    #[cfg_attr(feature = "serde", serde(rename = "SORT_BY_YEAR"))]
    Year,
}

impl SortBy {
    pub fn all() -> &'static [SortBy] {
        use SortBy::*;
        &[Popularity, ReleaseDate, UserRating, UserRatingCount, Year]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            SortBy::Popularity => "SORT_BY_POPULARITY",
            SortBy::ReleaseDate => "SORT_BY_RELEASE_DATE",
            SortBy::UserRating => "SORT_BY_USER_RATING",
            SortBy::UserRatingCount => "SORT_BY_USER_RATING_COUNT",
            SortBy::Year => "SORT_BY_YEAR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Popularity => "Popularity",
            SortBy::ReleaseDate => "Release Date",
            SortBy::UserRating => "User Rating",
            SortBy::UserRatingCount => "Rating Count",
            SortBy::Year => "Year",
        }
    }
}

impl FromStr for SortBy {
    type Err = ModelError;

    /// Accepts either the wire name (`SORT_BY_USER_RATING`) or the short
    /// form (`user-rating`, `user_rating`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        let short = normalized.strip_prefix("SORT_BY_").unwrap_or(&normalized);
        SortBy::all()
            .iter()
            .find(|sort| sort.api_name().trim_start_matches("SORT_BY_") == short)
            .copied()
            .ok_or_else(|| ModelError::UnknownSortField(s.to_string()))
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Sort direction for `/titles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[SortOrder::Asc, SortOrder::Desc]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(ModelError::UnknownSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_type_parses_user_spellings() {
        assert_eq!("movie".parse::<TitleType>(), Ok(TitleType::Movie));
        assert_eq!("tv-series".parse::<TitleType>(), Ok(TitleType::TvSeries));
        assert_eq!(
            "TV_MINI_SERIES".parse::<TitleType>(),
            Ok(TitleType::TvMiniSeries)
        );
        assert!("podcast".parse::<TitleType>().is_err());
    }

    #[test]
    fn wire_title_type_accepts_camel_case() {
        assert_eq!(TitleType::from("tvSeries".to_string()), TitleType::TvSeries);
        assert_eq!(TitleType::from("movie".to_string()), TitleType::Movie);
    }

    #[test]
    fn unknown_wire_title_type_is_preserved() {
        let parsed = TitleType::from("PODCAST_SERIES".to_string());
        assert_eq!(parsed, TitleType::Other("PODCAST_SERIES".into()));
        assert_eq!(String::from(parsed), "PODCAST_SERIES");
    }

    #[test]
    fn sort_by_accepts_short_and_wire_names() {
        assert_eq!("user-rating".parse::<SortBy>(), Ok(SortBy::UserRating));
        assert_eq!(
            "SORT_BY_USER_RATING_COUNT".parse::<SortBy>(),
            Ok(SortBy::UserRatingCount)
        );
        assert_eq!("year".parse::<SortBy>(), Ok(SortBy::Year));
        assert!("alphabetical".parse::<SortBy>().is_err());
    }

    #[test]
    fn defaults_match_remote_defaults() {
        assert_eq!(SortBy::default(), SortBy::Popularity);
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    #[test]
    fn genre_vocabulary_is_fixed() {
        assert_eq!(GENRES.len(), 15);
        assert!(GENRES.contains(&"Sci-Fi"));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_title_types_serialize_as_wire_names() {
        assert_eq!(
            serde_json::to_value(TitleType::TvMiniSeries).unwrap(),
            json!("TV_MINI_SERIES")
        );
        let parsed: TitleType =
            serde_json::from_value(json!("tvMiniSeries")).unwrap();
        assert_eq!(parsed, TitleType::TvMiniSeries);
    }

    #[test]
    fn unknown_title_type_survives_round_trip() {
        let parsed: TitleType =
            serde_json::from_value(json!("audioDrama")).unwrap();
        assert_eq!(parsed, TitleType::Other("audioDrama".into()));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!("audioDrama"));
    }

    #[test]
    fn sort_options_use_remote_names() {
        assert_eq!(
            serde_json::to_value(SortBy::UserRatingCount).unwrap(),
            json!("SORT_BY_USER_RATING_COUNT")
        );
        let sort: SortBy =
            serde_json::from_value(json!("SORT_BY_RELEASE_DATE")).unwrap();
        assert_eq!(sort, SortBy::ReleaseDate);

        assert_eq!(serde_json::to_value(SortOrder::Asc).unwrap(), json!("ASC"));
        let order: SortOrder = serde_json::from_value(json!("DESC")).unwrap();
        assert_eq!(order, SortOrder::Desc);
    }
}
