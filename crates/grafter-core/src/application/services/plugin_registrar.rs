//! Plugin registrar - ensure a named plugin appears exactly once in the
//! registry.
//!
//! The registrar loads a registry snapshot once at construction and works
//! against that snapshot for its whole life; it never re-reads the file
//! between steps. Per instance the only state transition is
//! `Unregistered -> Registered`, and `Registered` is terminal: a second
//! `register()` call is a no-op.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::FileTree},
    domain::{PluginOptions, Registry},
    error::GraftResult,
};

/// Outcome of a [`PluginRegistrar::register`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new entry was appended and the registry was written back.
    Added,
    /// An entry already existed; nothing was written and staged options
    /// were discarded — idempotence takes priority over option updates.
    AlreadyRegistered,
}

/// Idempotent registration of one plugin into one registry file.
///
/// # Example
///
/// ```rust,no_run
/// # use grafter_core::application::PluginRegistrar;
/// # fn demo(tree: Box<dyn grafter_core::application::ports::FileTree>)
/// #         -> grafter_core::error::GraftResult<()> {
/// let mut registrar = PluginRegistrar::load(tree, "workspace.json", "@scope/x-prisma")?
///     .with_option("schema", "./prisma/schema.prisma".into())
///     .with_option("outputPath", "./generated".into());
/// registrar.register()?;
/// # Ok(())
/// # }
/// ```
pub struct PluginRegistrar {
    tree: Box<dyn FileTree>,
    registry_path: PathBuf,
    plugin_name: String,
    registry: Registry,
    options: PluginOptions,
    registered: bool,
}

impl PluginRegistrar {
    /// Read the registry snapshot and prepare a registrar for one plugin.
    ///
    /// A missing file over an existing parent directory is an empty base;
    /// a missing parent directory or unparseable content is fatal.
    #[instrument(skip_all, fields(registry = %registry_path.as_ref().display()))]
    pub fn load(
        tree: Box<dyn FileTree>,
        registry_path: impl AsRef<std::path::Path>,
        plugin_name: impl Into<String>,
    ) -> GraftResult<Self> {
        let registry_path = registry_path.as_ref().to_path_buf();
        let plugin_name = plugin_name.into();

        if let Some(parent) = registry_path.parent() {
            if !parent.as_os_str().is_empty() && !tree.dir_exists(parent) {
                return Err(ApplicationError::RegistryNotFound {
                    path: registry_path,
                }
                .into());
            }
        }

        let registry = match tree.read_file(&registry_path)? {
            Some(text) => Registry::parse(&text).map_err(|e| ApplicationError::RegistryParse {
                path: registry_path.clone(),
                reason: e.to_string(),
            })?,
            None => {
                debug!("Registry missing, starting from an empty base");
                Registry::new()
            }
        };

        let registered = registry.contains(&plugin_name);
        Ok(Self {
            tree,
            registry_path,
            plugin_name,
            registry,
            options: PluginOptions::new(),
            registered,
        })
    }

    /// Stage one option for the entry to be created. Chainable.
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Stage several options at once. Chainable.
    pub fn with_options<I, K>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.options.extend(options);
        self
    }

    /// Whether an entry for this plugin exists in the held snapshot,
    /// matching either the bare-name or the object form.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Append the entry and persist the registry, unless one already
    /// exists.
    ///
    /// Option keys are validated here, before any mutation, so a malformed
    /// key fails the registration instead of poisoning the registry file.
    #[instrument(skip_all, fields(plugin = %self.plugin_name))]
    pub fn register(&mut self) -> GraftResult<Registration> {
        if self.registered {
            debug!("Plugin already registered, skipping");
            return Ok(Registration::AlreadyRegistered);
        }

        self.options.validate(&self.plugin_name)?;
        self.registry.push(&self.plugin_name, &self.options)?;
        self.tree
            .write_file(&self.registry_path, &self.registry.to_pretty_string()?)?;

        self.registered = true;
        info!("Plugin registered");
        Ok(Registration::Added)
    }

    /// The plugin name this registrar manages.
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }
}

// The boxed tree has no Debug of its own; render the value-shaped state.
impl fmt::Debug for PluginRegistrar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistrar")
            .field("registry_path", &self.registry_path)
            .field("plugin_name", &self.plugin_name)
            .field("registered", &self.registered)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFileTree;
    use crate::domain::DomainError;
    use crate::error::GraftError;
    use serde_json::json;

    fn tree_with(content: Option<&'static str>) -> MockFileTree {
        let mut tree = MockFileTree::new();
        tree.expect_dir_exists().return_const(true);
        tree.expect_read_file()
            .returning(move |_| Ok(content.map(str::to_string)));
        tree
    }

    #[test]
    fn registers_into_missing_registry() {
        let mut tree = tree_with(None);
        tree.expect_write_file()
            .times(1)
            .withf(|_, content| content.contains("\"plugin\": \"@scope/x-utils\""))
            .returning(|_, _| Ok(()));

        let mut registrar =
            PluginRegistrar::load(Box::new(tree), "workspace.json", "@scope/x-utils").unwrap();
        assert!(!registrar.is_registered());
        assert_eq!(registrar.register().unwrap(), Registration::Added);
        assert!(registrar.is_registered());
    }

    #[test]
    fn second_register_on_same_instance_is_noop() {
        let mut tree = tree_with(None);
        tree.expect_write_file().times(1).returning(|_, _| Ok(()));

        let mut registrar =
            PluginRegistrar::load(Box::new(tree), "workspace.json", "@scope/x-utils").unwrap();
        assert_eq!(registrar.register().unwrap(), Registration::Added);
        assert_eq!(
            registrar.register().unwrap(),
            Registration::AlreadyRegistered
        );
    }

    #[test]
    fn bare_string_entry_detected() {
        let tree = tree_with(Some(r#"{"plugins": ["@scope/x-prisma"]}"#));
        let registrar =
            PluginRegistrar::load(Box::new(tree), "workspace.json", "@scope/x-prisma").unwrap();
        assert!(registrar.is_registered());
    }

    #[test]
    fn object_entry_detected() {
        let tree =
            tree_with(Some(r#"{"plugins": [{"plugin": "@scope/x-prisma", "options": {}}]}"#));
        let registrar =
            PluginRegistrar::load(Box::new(tree), "workspace.json", "@scope/x-prisma").unwrap();
        assert!(registrar.is_registered());
    }

    #[test]
    fn existing_entry_discards_staged_options() {
        // No write may happen: the entry exists, options are dropped.
        let tree = tree_with(Some(r#"{"plugins": ["@scope/x-prisma"]}"#));
        let mut registrar =
            PluginRegistrar::load(Box::new(tree), "workspace.json", "@scope/x-prisma")
                .unwrap()
                .with_option("schema", json!("./other.prisma"));
        assert_eq!(
            registrar.register().unwrap(),
            Registration::AlreadyRegistered
        );
    }

    #[test]
    fn staged_options_written_with_entry() {
        let mut tree = tree_with(None);
        tree.expect_write_file()
            .times(1)
            .withf(|_, content| {
                content.contains("\"schema\": \"./prisma/schema.prisma\"")
                    && content.contains("\"outputPath\": \"./generated\"")
            })
            .returning(|_, _| Ok(()));

        let mut registrar =
            PluginRegistrar::load(Box::new(tree), "workspace.json", "@scope/x-prisma")
                .unwrap()
                .with_options([
                    ("schema", json!("./prisma/schema.prisma")),
                    ("outputPath", json!("./generated")),
                ]);
        assert_eq!(registrar.register().unwrap(), Registration::Added);
    }

    #[test]
    fn empty_option_key_fails_before_write() {
        let tree = tree_with(None);
        let mut registrar =
            PluginRegistrar::load(Box::new(tree), "workspace.json", "@scope/x-prisma")
                .unwrap()
                .with_option("", json!(true));
        let err = registrar.register().unwrap_err();
        assert!(matches!(
            err,
            GraftError::Domain(DomainError::EmptyOptionKey { .. })
        ));
    }

    #[test]
    fn debug_output_names_the_plugin() {
        let tree = tree_with(None);
        let registrar =
            PluginRegistrar::load(Box::new(tree), "workspace.json", "@scope/x-utils").unwrap();
        let rendered = format!("{registrar:?}");
        assert!(rendered.contains("@scope/x-utils"));
        assert!(rendered.contains("workspace.json"));
    }

    #[test]
    fn missing_parent_directory_is_registry_not_found() {
        let mut tree = MockFileTree::new();
        tree.expect_dir_exists().return_const(false);

        let err = PluginRegistrar::load(Box::new(tree), "nope/workspace.json", "@scope/p")
            .unwrap_err();
        assert!(matches!(
            err,
            GraftError::Application(ApplicationError::RegistryNotFound { .. })
        ));
    }

    #[test]
    fn unparseable_registry_is_parse_error() {
        let tree = tree_with(Some("][ nonsense"));
        let err =
            PluginRegistrar::load(Box::new(tree), "workspace.json", "@scope/p").unwrap_err();
        assert!(matches!(
            err,
            GraftError::Application(ApplicationError::RegistryParse { .. })
        ));
    }
}
