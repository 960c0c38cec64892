//! Response envelopes for the remote metadata endpoints.
//!
//! Every list field defaults to empty and every scalar is optional; the
//! remote schema is not validated beyond that.

use crate::title::{Country, Image, Language, Person, Title};

/// `/titles` response.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TitlePage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub titles: Vec<Title>,
    pub total_count: Option<u64>,
    pub next_page_token: Option<String>,
}

impl TitlePage {
    /// Cursor for the following page; empty tokens count as absent.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_page_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

/// `/titles:batchGet` response.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchTitles {
    #[cfg_attr(feature = "serde", serde(default))]
    pub titles: Vec<Title>,
}

/// `/search/titles` response.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResults {
    #[cfg_attr(feature = "serde", serde(default))]
    pub titles: Vec<Title>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Credit {
    pub name: Option<Person>,
    pub category: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Vec<String>,
    pub episode_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreditsPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub credits: Vec<Credit>,
    pub total_count: Option<u64>,
    pub next_page_token: Option<String>,
}

/// Calendar date where any component may be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartialDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl std::fmt::Display for PartialDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => write!(f, "{y:04}-{m:02}-{d:02}"),
            (Some(y), Some(m), None) => write!(f, "{y:04}-{m:02}"),
            (Some(y), None, _) => write!(f, "{y:04}"),
            _ => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReleaseDate {
    pub country: Option<Country>,
    pub release_date: Option<PartialDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReleaseDatesPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_dates: Vec<ReleaseDate>,
    pub next_page_token: Option<String>,
}

/// Alternative title ("also known as").
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aka {
    pub text: String,
    pub country: Option<Country>,
    pub language: Option<Language>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AkasList {
    #[cfg_attr(feature = "serde", serde(default))]
    pub akas: Vec<Aka>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Season {
    pub season: String,
    pub episode_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonsList {
    #[cfg_attr(feature = "serde", serde(default))]
    pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Episode {
    pub id: String,
    pub title: Option<String>,
    pub primary_image: Option<Image>,
    pub season: Option<String>,
    pub episode_number: Option<u32>,
    pub runtime_seconds: Option<u32>,
    pub plot: Option<String>,
    pub rating: Option<crate::title::Rating>,
    pub release_date: Option<PartialDate>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EpisodesPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub episodes: Vec<Episode>,
    pub total_count: Option<u64>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub image_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ImagesPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<TitleImage>,
    pub total_count: Option<u64>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Video {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub video_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub primary_image: Option<Image>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub runtime_seconds: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VideosPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub videos: Vec<Video>,
    pub total_count: Option<u64>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardEvent {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AwardNomination {
    pub event: Option<AwardEvent>,
    pub year: Option<i32>,
    pub text: Option<String>,
    pub category: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nominees: Vec<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_winner: bool,
    pub winner_rank: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AwardStats {
    pub nomination_count: Option<u32>,
    pub win_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AwardNominationsPage {
    pub stats: Option<AwardStats>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub award_nominations: Vec<AwardNomination>,
    pub total_count: Option<u64>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SeverityBreakdown {
    pub severity_level: Option<String>,
    pub vote_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GuideReview {
    pub text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_spoiler: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GuideCategory {
    pub category: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub severity_breakdowns: Vec<SeverityBreakdown>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reviews: Vec<GuideReview>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParentsGuide {
    #[cfg_attr(feature = "serde", serde(default))]
    pub parents_guide: Vec<GuideCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Certificate {
    pub rating: Option<String>,
    pub country: Option<Country>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CertificatesList {
    #[cfg_attr(feature = "serde", serde(default))]
    pub certificates: Vec<Certificate>,
    pub total_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Company {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompanyCredit {
    pub company: Option<Company>,
    pub category: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub countries: Vec<Country>,
    pub years_involved: Option<PartialYears>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PartialYears {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompanyCreditsPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub company_credits: Vec<CompanyCredit>,
    pub total_count: Option<u64>,
    pub next_page_token: Option<String>,
}

/// Monetary amount; the service reports amounts as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Money {
    pub amount: Option<String>,
    pub currency: Option<String>,
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.amount, &self.currency) {
            (Some(amount), Some(currency)) => write!(f, "{amount} {currency}"),
            (Some(amount), None) => write!(f, "{amount}"),
            _ => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OpeningWeekend {
    pub gross: Option<Money>,
    pub weekend_end_date: Option<PartialDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoxOffice {
    pub domestic_gross: Option<Money>,
    pub worldwide_gross: Option<Money>,
    pub opening_weekend_gross: Option<OpeningWeekend>,
    pub production_budget: Option<Money>,
}
