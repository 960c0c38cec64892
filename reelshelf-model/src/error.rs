use std::fmt::{self, Display};

/// Errors produced when parsing model vocabularies from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownTitleType(String),
    UnknownSortField(String),
    UnknownSortOrder(String),
    UnknownList(String),
    EmptyTitleId,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownTitleType(raw) => {
                write!(f, "unknown title type: {raw}")
            }
            ModelError::UnknownSortField(raw) => {
                write!(f, "unknown sort field: {raw}")
            }
            ModelError::UnknownSortOrder(raw) => {
                write!(f, "unknown sort order: {raw}")
            }
            ModelError::UnknownList(raw) => write!(f, "unknown list: {raw}"),
            ModelError::EmptyTitleId => write!(f, "title id must not be empty"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
