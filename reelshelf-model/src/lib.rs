//! Data model definitions shared across reelshelf crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod list;
pub mod prelude;
pub mod resources;
pub mod title;
pub mod vocab;

// Curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::TitleId;
pub use list::ListKind;
pub use resources::{
    AkasList, AwardNominationsPage, BatchTitles, BoxOffice, CertificatesList,
    CompanyCreditsPage, Credit, CreditsPage, EpisodesPage, ImagesPage,
    ParentsGuide, ReleaseDatesPage, SearchResults, SeasonsList, TitleImage,
    TitlePage, VideosPage,
};
pub use title::{Country, Image, Language, Metacritic, Person, Rating, Title};
pub use vocab::{GENRES, SortBy, SortOrder, TitleType};
