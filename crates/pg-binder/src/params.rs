//! Substitution mappings passed to the binder.

use std::collections::HashMap;

use crate::value::{BindValue, ToBindValue};

/// A mapping from parameter name to bound value.
///
/// Insertion order does not matter: positional order in the output is
/// decided by first occurrence in the statement text, not by the order
/// names were added here. Names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindParams {
    entries: HashMap<String, BindValue>,
}

impl BindParams {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous one under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToBindValue) {
        self.entries.insert(name.into(), value.to_bind_value());
    }

    /// Builder-style [`insert`](Self::insert) for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToBindValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value bound under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BindValue> {
        self.entries.get(name)
    }

    /// Returns the number of names in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping holds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: ToBindValue> FromIterator<(K, V)> for BindParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Input to [`bind_insert_query`](crate::bind_insert_query): either a single
/// mapping or one mapping per row.
///
/// Passing a single mapping binds the statement as-is instead of expanding a
/// `VALUES` clause; this mirrors the permissive call shape of the operation.
#[derive(Debug, Clone)]
pub enum Records {
    /// A single mapping; the statement is bound without expansion.
    Single(BindParams),
    /// One mapping per row of a multi-row INSERT.
    Rows(Vec<BindParams>),
}

impl From<BindParams> for Records {
    fn from(params: BindParams) -> Self {
        Self::Single(params)
    }
}

impl From<Vec<BindParams>> for Records {
    fn from(rows: Vec<BindParams>) -> Self {
        Self::Rows(rows)
    }
}
