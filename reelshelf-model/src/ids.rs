use crate::error::ModelError;
use std::str::FromStr;

/// Remote identifier of a catalog title (e.g. `tt0111161`).
///
/// The id is the sole equality key for list membership; the rest of a
/// [`Title`](crate::Title) record is carried along but never compared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TitleId(pub String);

impl TitleId {
    pub fn new(id: impl Into<String>) -> Self {
        TitleId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TitleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TitleId {
    fn from(value: &str) -> Self {
        TitleId(value.to_string())
    }
}

impl From<String> for TitleId {
    fn from(value: String) -> Self {
        TitleId(value)
    }
}

impl FromStr for TitleId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyTitleId);
        }
        Ok(TitleId(trimmed.to_string()))
    }
}

impl std::fmt::Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
