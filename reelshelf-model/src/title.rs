use crate::ids::TitleId;
use crate::vocab::TitleType;

/// Aggregate user rating as reported by the remote service.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Rating {
    pub aggregate_rating: Option<f64>,
    pub vote_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A person credited on a title (director, writer, star).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Person {
    pub id: String,
    pub display_name: Option<String>,
    pub primary_image: Option<Image>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_professions: Vec<String>,
}

impl Person {
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    pub code: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Language {
    pub code: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Metacritic {
    pub score: Option<u32>,
    pub review_count: Option<u32>,
}

/// A single catalog entry.
///
/// Records are passed through from the remote service; only `id` is
/// required. Extended fields are populated by the detail endpoint and are
/// usually absent from list and search responses.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Title {
    pub id: TitleId,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub title_type: Option<TitleType>,
    pub primary_title: Option<String>,
    pub original_title: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub runtime_seconds: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<String>,
    pub rating: Option<Rating>,
    pub primary_image: Option<Image>,
    pub plot: Option<String>,
    pub metacritic: Option<Metacritic>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub directors: Vec<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub writers: Vec<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stars: Vec<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin_countries: Vec<Country>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spoken_languages: Vec<Language>,
}

impl Title {
    /// Minimal record carrying only an id and a display title.
    pub fn new(id: impl Into<TitleId>, primary_title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            primary_title: Some(primary_title.into()),
            ..Self::default()
        }
    }

    pub fn display_title(&self) -> &str {
        self.primary_title
            .as_deref()
            .or(self.original_title.as_deref())
            .unwrap_or(self.id.as_str())
    }

    /// Original title, only when it differs from the primary one.
    pub fn distinct_original_title(&self) -> Option<&str> {
        match (&self.original_title, &self.primary_title) {
            (Some(original), Some(primary)) if original != primary => {
                Some(original.as_str())
            }
            (Some(original), None) => Some(original.as_str()),
            _ => None,
        }
    }

    /// One decimal place, or `N/A` when the rating is missing.
    pub fn display_rating(&self) -> String {
        self.rating
            .as_ref()
            .and_then(|rating| rating.aggregate_rating)
            .map(|value| format!("{value:.1}"))
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn year_label(&self) -> Option<String> {
        match (self.start_year, self.end_year) {
            (Some(start), Some(end)) if end != start => {
                Some(format!("{start}-{end}"))
            }
            (Some(start), _) => Some(start.to_string()),
            (None, Some(end)) => Some(end.to_string()),
            (None, None) => None,
        }
    }

    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime_seconds.map(|secs| secs / 60)
    }

    pub fn poster_url(&self) -> Option<&str> {
        self.primary_image.as_ref().map(|image| image.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rating_formats_or_falls_back() {
        let mut title = Title::new("tt1", "One");
        assert_eq!(title.display_rating(), "N/A");

        title.rating = Some(Rating {
            aggregate_rating: Some(8.26),
            vote_count: Some(10),
        });
        assert_eq!(title.display_rating(), "8.3");
    }

    #[test]
    fn original_title_hidden_when_equal() {
        let mut title = Title::new("tt1", "Amelie");
        title.original_title = Some("Amelie".into());
        assert_eq!(title.distinct_original_title(), None);

        title.original_title = Some("Le Fabuleux Destin".into());
        assert_eq!(title.distinct_original_title(), Some("Le Fabuleux Destin"));
    }

    #[test]
    fn year_label_collapses_single_year_ranges() {
        let mut title = Title::new("tt1", "Show");
        title.start_year = Some(2008);
        title.end_year = Some(2013);
        assert_eq!(title.year_label().as_deref(), Some("2008-2013"));

        title.end_year = Some(2008);
        assert_eq!(title.year_label().as_deref(), Some("2008"));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_reads_remote_field_names() {
        let title: Title = serde_json::from_value(json!({
            "id": "tt0133093",
            "type": "movie",
            "primaryTitle": "The Matrix",
            "startYear": 1999,
            "runtimeSeconds": 8160,
            "genres": ["Action", "Sci-Fi"],
            "rating": { "aggregateRating": 8.7, "voteCount": 2100000 },
            "primaryImage": { "url": "https://img.example/matrix.jpg", "width": 800 },
            "directors": [{ "id": "nm0905154", "displayName": "Lana Wachowski" }]
        }))
        .unwrap();

        assert_eq!(title.id, TitleId::new("tt0133093"));
        assert_eq!(title.title_type, Some(TitleType::Movie));
        assert_eq!(title.runtime_minutes(), Some(136));
        assert_eq!(title.display_rating(), "8.7");
        assert_eq!(title.poster_url(), Some("https://img.example/matrix.jpg"));
        assert_eq!(title.directors[0].name(), "Lana Wachowski");
        assert!(title.writers.is_empty());
    }

    #[test]
    fn stored_title_round_trips_unchanged() {
        let mut title = Title::new("tt9000001", "Harbour Lights");
        title.title_type = Some(TitleType::Other("PODCAST_SERIES".into()));
        title.start_year = Some(2021);
        title.genres = vec!["Drama".into()];
        title.rating = Some(Rating {
            aggregate_rating: Some(7.5),
            vote_count: Some(42),
        });
        title.origin_countries = vec![Country {
            code: "IE".into(),
            name: Some("Ireland".into()),
        }];

        let value = serde_json::to_value(&title).unwrap();
        assert_eq!(value["type"], "PODCAST_SERIES");
        assert_eq!(value["primaryTitle"], "Harbour Lights");
        assert_eq!(value["rating"]["voteCount"], 42);
        assert!(value.get("title_type").is_none());

        let back: Title = serde_json::from_value(value).unwrap();
        assert_eq!(back, title);
    }
}
