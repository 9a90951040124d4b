//! Staged dependency requirements.
//!
//! A [`DependencySet`] is the in-memory side of a manifest edit: package
//! name to version specifier, insertion-ordered, last write wins. Two
//! independent sets exist per editor — production and development.

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// An insertion-ordered mapping from package name to version specifier.
///
/// Version specifiers are opaque strings; `*` and other wildcard forms pass
/// through untouched. Overwriting an existing name keeps its original
/// position in the set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DependencySet {
    entries: Map<String, Value>,
}

impl DependencySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a single entry. Last write wins.
    pub fn insert(&mut self, name: impl Into<String>, spec: impl Into<String>) {
        self.entries.insert(name.into(), Value::String(spec.into()));
    }

    /// Bulk merge; later keys overwrite earlier ones on collision.
    pub fn extend<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, spec) in entries {
            self.insert(name, spec);
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The version specifier staged for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(Value::as_str)
    }

    /// Reject sets containing an empty package name.
    ///
    /// `section` only labels the resulting error.
    pub fn validate(&self, section: &str) -> Result<(), DomainError> {
        if self.entries.keys().any(|name| name.trim().is_empty()) {
            return Err(DomainError::EmptyPackageName {
                section: section.to_string(),
            });
        }
        Ok(())
    }

    /// The underlying JSON object, for merging into a manifest section.
    pub(crate) fn as_object(&self) -> &Map<String, Value> {
        &self.entries
    }
}
