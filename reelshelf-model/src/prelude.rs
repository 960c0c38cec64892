//! Presentation focused snapshot of the types surface.
//! Prefer importing from this module when rendering titles or building
//! filter options.

pub use super::ids::TitleId;
pub use super::list::ListKind;
pub use super::resources::{CreditsPage, ImagesPage, SearchResults, TitlePage};
pub use super::title::{Image, Person, Rating, Title};
pub use super::vocab::{GENRES, SortBy, SortOrder, TitleType};
