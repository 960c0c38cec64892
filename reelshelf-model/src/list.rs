use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One of the user-curated membership lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ListKind {
    Favorites,
    Watchlist,
}

impl ListKind {
    pub fn all() -> &'static [ListKind] {
        &[ListKind::Favorites, ListKind::Watchlist]
    }

    /// Durable storage key; one key per list.
    pub fn storage_key(&self) -> &'static str {
        match self {
            ListKind::Favorites => "reelshelf.favorites",
            ListKind::Watchlist => "reelshelf.watchlist",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Favorites => "Favorites",
            ListKind::Watchlist => "Watchlist",
        }
    }
}

impl FromStr for ListKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "favorites" | "favourites" | "fav" | "favs" => {
                Ok(ListKind::Favorites)
            }
            "watchlist" | "watch" => Ok(ListKind::Watchlist),
            _ => Err(ModelError::UnknownList(s.to_string())),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_are_distinct_and_namespaced() {
        let keys: Vec<_> =
            ListKind::all().iter().map(|k| k.storage_key()).collect();
        assert_eq!(keys, vec!["reelshelf.favorites", "reelshelf.watchlist"]);
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("Favourites".parse::<ListKind>(), Ok(ListKind::Favorites));
        assert_eq!("watch".parse::<ListKind>(), Ok(ListKind::Watchlist));
        assert!("later".parse::<ListKind>().is_err());
    }
}
