//! The dependency manifest and its merge rules.
//!
//! A [`Manifest`] wraps the parsed JSON object of a `package.json`-style
//! file. It knows how to merge a [`DependencySet`] into one of its two
//! dependency sections while leaving every other top-level field untouched,
//! in its original order.

use std::fmt;

use serde_json::{Map, Value};

use crate::domain::{dependency::DependencySet, error::DomainError};

/// The two dependency sections a manifest carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Production,
    Development,
}

impl Section {
    /// The manifest key this section lives under.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Production => "dependencies",
            Self::Development => "devDependencies",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A parsed dependency manifest.
///
/// Invariant: the merged manifest is always the union of pre-existing and
/// staged entries; staged entries only overwrite pre-existing ones at the
/// same key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Manifest {
    root: Map<String, Value>,
}

impl Manifest {
    /// An empty manifest — the base used when the target file is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse manifest text.
    ///
    /// Fails when the text is not valid JSON or its top level is not an
    /// object; the reason carries serde's line/column context.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DomainError::InvalidManifest {
                reason: e.to_string(),
            })?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(DomainError::InvalidManifest {
                reason: format!("expected a JSON object at the top level, got {}", kind(&other)),
            }),
        }
    }

    /// Merge a dependency set into one section.
    ///
    /// Pre-existing entries keep their positions; staged entries overwrite
    /// at the same key and append otherwise. An empty set is a no-op — it
    /// does not even create the section.
    pub fn merge_section(&mut self, section: Section, set: &DependencySet) -> Result<(), DomainError> {
        if set.is_empty() {
            return Ok(());
        }

        let slot = self
            .root
            .entry(section.key().to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        let Value::Object(existing) = slot else {
            return Err(DomainError::InvalidManifest {
                reason: format!("'{}' is not a JSON object", section),
            });
        };

        for (name, spec) in set.as_object() {
            existing.insert(name.clone(), spec.clone());
        }
        Ok(())
    }

    /// Read access to a dependency section, if present.
    pub fn section(&self, section: Section) -> Option<&Map<String, Value>> {
        self.root.get(section.key()).and_then(Value::as_object)
    }

    /// A top-level field other than the dependency sections.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Render as 2-space-indented JSON with a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        let mut text = serde_json::to_string_pretty(&self.root).map_err(|e| {
            DomainError::InvalidManifest {
                reason: format!("serialization failed: {e}"),
            }
        })?;
        text.push('\n');
        Ok(text)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(entries: &[(&str, &str)]) -> DependencySet {
        let mut set = DependencySet::new();
        set.extend(entries.iter().copied());
        set
    }

    #[test]
    fn parse_rejects_non_object() {
        assert!(matches!(
            Manifest::parse("[1, 2]"),
            Err(DomainError::InvalidManifest { .. })
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = Manifest::parse("{ not json").unwrap_err();
        assert!(matches!(err, DomainError::InvalidManifest { .. }));
    }

    #[test]
    fn merge_keeps_preexisting_entries() {
        let mut manifest =
            Manifest::parse(r#"{"devDependencies": {"a": "1.0.0"}}"#).unwrap();
        manifest
            .merge_section(Section::Development, &set_of(&[("b", "2.0.0")]))
            .unwrap();

        let dev = manifest.section(Section::Development).unwrap();
        assert_eq!(dev["a"], "1.0.0");
        assert_eq!(dev["b"], "2.0.0");
        assert_eq!(dev.len(), 2);
    }

    #[test]
    fn merge_overwrites_at_same_key() {
        let mut manifest = Manifest::parse(r#"{"dependencies": {"x": "1.0.0"}}"#).unwrap();
        manifest
            .merge_section(Section::Production, &set_of(&[("x", "2.0.0")]))
            .unwrap();

        let deps = manifest.section(Section::Production).unwrap();
        assert_eq!(deps["x"], "2.0.0");
        assert_eq!(deps.len(), 1);
    }

    #[test]
    fn empty_set_does_not_create_section() {
        let mut manifest = Manifest::parse(r#"{"name": "demo"}"#).unwrap();
        manifest
            .merge_section(Section::Production, &DependencySet::new())
            .unwrap();
        assert!(manifest.section(Section::Production).is_none());
    }

    #[test]
    fn unknown_fields_preserved_in_order() {
        let text = r#"{"name": "demo", "scripts": {"build": "tsc"}, "dependencies": {}}"#;
        let mut manifest = Manifest::parse(text).unwrap();
        manifest
            .merge_section(Section::Production, &set_of(&[("left-pad", "*")]))
            .unwrap();

        let rendered = manifest.to_pretty_string().unwrap();
        let name_at = rendered.find("\"name\"").unwrap();
        let scripts_at = rendered.find("\"scripts\"").unwrap();
        let deps_at = rendered.find("\"dependencies\"").unwrap();
        assert!(name_at < scripts_at && scripts_at < deps_at);
        assert!(rendered.contains("left-pad"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn merge_into_non_object_section_fails() {
        let mut manifest = Manifest::parse(r#"{"dependencies": "oops"}"#).unwrap();
        let err = manifest
            .merge_section(Section::Production, &set_of(&[("a", "1")]))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidManifest { .. }));
    }

    #[test]
    fn section_keys() {
        assert_eq!(Section::Production.key(), "dependencies");
        assert_eq!(Section::Development.key(), "devDependencies");
    }
}
