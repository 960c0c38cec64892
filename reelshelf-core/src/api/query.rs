//! Query-string assembly for remote requests.
//!
//! Options are explicit structs with `Option` fields. [`QueryPairs`] applies
//! the omit-if-absent rule mechanically: `None`, empty strings and empty
//! arrays never reach the wire, arrays become one pair per element.

use std::fmt::Display;

/// Ordered list of `key=value` pairs for a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitted unless the rendered value is empty.
    pub fn push(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((key, value));
        }
        self
    }

    pub fn push_opt<V: Display>(
        &mut self,
        key: &'static str,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// One pair per element, in element order.
    pub fn push_all<I, V>(&mut self, key: &'static str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        for value in values {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Values recorded for `key`, in insertion order.
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }
}

/// Anything that can describe itself as request parameters.
pub trait ToQuery {
    fn to_query(&self) -> QueryPairs;
}
