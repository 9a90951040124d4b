//! The plugin registry and its entry forms.
//!
//! A registry is a JSON object whose `plugins` array holds either bare name
//! strings or objects of the form `{ "plugin": <name>, "options": <map> }`.
//! Detection treats both forms as equivalent; insertion always writes the
//! object form.

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// Options staged for a plugin entry: option key to arbitrary JSON value,
/// insertion-ordered.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PluginOptions {
    entries: Map<String, Value>,
}

impl PluginOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage one option. Last write wins on collision.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Stage several options at once.
    pub fn extend<I, K>(&mut self, options: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (key, value) in options {
            self.insert(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Option keys must be non-empty; malformed keys fail at registration
    /// time rather than when some later consumer reads the registry.
    pub fn validate(&self, plugin: &str) -> Result<(), DomainError> {
        if self.entries.keys().any(|key| key.trim().is_empty()) {
            return Err(DomainError::EmptyOptionKey {
                plugin: plugin.to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn as_object(&self) -> &Map<String, Value> {
        &self.entries
    }
}

/// A parsed plugin registry.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Registry {
    root: Map<String, Value>,
}

impl Registry {
    /// An empty registry — the base used when the file is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse registry text; same rules as manifest parsing.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DomainError::InvalidRegistry {
                reason: e.to_string(),
            })?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(DomainError::InvalidRegistry {
                reason: "expected a JSON object at the top level".into(),
            }),
        }
    }

    /// Whether an entry for `name` exists, in either form: a bare string
    /// equal to `name`, or an object whose `plugin` field equals `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries()
            .map(|list| list.iter().any(|entry| entry_matches(entry, name)))
            .unwrap_or(false)
    }

    /// Append `{ "plugin": name, "options": options }` to the `plugins`
    /// array, creating it if absent. Never deduplicates — idempotence is the
    /// registrar's job.
    pub fn push(&mut self, name: &str, options: &PluginOptions) -> Result<(), DomainError> {
        let slot = self
            .root
            .entry("plugins".to_string())
            .or_insert_with(|| Value::Array(Vec::new()));

        let Value::Array(list) = slot else {
            return Err(DomainError::InvalidRegistry {
                reason: "'plugins' is not a JSON array".into(),
            });
        };

        let mut entry = Map::new();
        entry.insert("plugin".into(), Value::String(name.to_string()));
        entry.insert("options".into(), Value::Object(options.as_object().clone()));
        list.push(Value::Object(entry));
        Ok(())
    }

    /// The `plugins` array, if present.
    pub fn entries(&self) -> Option<&Vec<Value>> {
        self.root.get("plugins").and_then(Value::as_array)
    }

    /// Render as 2-space-indented JSON with a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        let mut text = serde_json::to_string_pretty(&self.root).map_err(|e| {
            DomainError::InvalidRegistry {
                reason: format!("serialization failed: {e}"),
            }
        })?;
        text.push('\n');
        Ok(text)
    }
}

fn entry_matches(entry: &Value, name: &str) -> bool {
    match entry {
        Value::String(s) => s == name,
        Value::Object(obj) => obj.get("plugin").and_then(Value::as_str) == Some(name),
        _ => false,
    }
}
