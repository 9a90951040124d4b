//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config FILE` if given
//! 3. `.grafter.toml` in the current directory
//! 4. The global config file (`~/.config/grafter/config.toml` on Linux)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Name of the per-project config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".grafter.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default file targets.
    pub defaults: Defaults,
    /// Install/format command settings.
    pub actions: ActionsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Manifest edited when `--manifest` is not given.
    pub manifest: PathBuf,
    /// Registry edited when `--registry` is not given.
    pub registry: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    /// Command run after a manifest write, in the manifest's directory.
    pub install_command: String,
    /// Command run over the written files after the install step.
    pub format_command: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("package.json"),
            registry: PathBuf::from("workspace.json"),
        }
    }
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            install_command: "npm install".into(),
            format_command: "npx prettier --write".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `--config FILE` must exist and parse; a missing implicit
    /// file (local or global) just falls through to the next source.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }

        let global = Self::config_path();
        if global.exists() {
            return Self::from_file(&global);
        }

        Ok(Self::default())
    }

    /// Read and parse one TOML config file.
    fn from_file(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        toml::from_str(&text).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Render the configuration as TOML, for `init` and `config list`.
    pub fn to_toml_string(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: "cannot serialise configuration".into(),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.grafter.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "grafter", "grafter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    // ── dotted-key access for `config get` / `config set` ─────────────────

    /// Look up a value by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "defaults.manifest" => Some(self.defaults.manifest.display().to_string()),
            "defaults.registry" => Some(self.defaults.registry.display().to_string()),
            "actions.install_command" => Some(self.actions.install_command.clone()),
            "actions.format_command" => Some(self.actions.format_command.clone()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Set a value by dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        match key {
            "defaults.manifest" => self.defaults.manifest = PathBuf::from(value),
            "defaults.registry" => self.defaults.registry = PathBuf::from(value),
            "actions.install_command" => self.actions.install_command = value.into(),
            "actions.format_command" => self.actions.format_command = value.into(),
            "output.no_color" => {
                self.output.no_color = value.parse().map_err(|_| CliError::InvalidInput {
                    message: format!("'{value}' is not a boolean"),
                    source: None,
                })?;
            }
            "output.format" => self.output.format = value.into(),
            _ => {
                return Err(CliError::UnknownConfigKey { key: key.into() });
            }
        }
        Ok(())
    }

    /// All dotted keys, in display order.
    pub fn keys() -> &'static [&'static str] {
        &[
            "defaults.manifest",
            "defaults.registry",
            "actions.install_command",
            "actions.format_command",
            "output.no_color",
            "output.format",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_is_package_json() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.manifest, PathBuf::from("package.json"));
        assert_eq!(cfg.defaults.registry, PathBuf::from("workspace.json"));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: AppConfig =
            toml::from_str("[defaults]\nmanifest = \"apps/api/package.json\"\n").unwrap();
        assert_eq!(cfg.defaults.manifest, PathBuf::from("apps/api/package.json"));
        assert_eq!(cfg.defaults.registry, PathBuf::from("workspace.json"));
        assert_eq!(cfg.actions.install_command, "npm install");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/grafter.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn toml_round_trip() {
        let cfg = AppConfig::default();
        let text = cfg.to_toml_string().unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.defaults.manifest, cfg.defaults.manifest);
        assert_eq!(parsed.actions.format_command, cfg.actions.format_command);
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut cfg = AppConfig::default();
        cfg.set("actions.install_command", "pnpm install").unwrap();
        assert_eq!(
            cfg.get("actions.install_command").as_deref(),
            Some("pnpm install")
        );
    }

    #[test]
    fn set_unknown_key_fails() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            cfg.set("nope.nothing", "x"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn every_advertised_key_resolves() {
        let cfg = AppConfig::default();
        for key in AppConfig::keys() {
            assert!(cfg.get(key).is_some(), "key {key} did not resolve");
        }
    }
}
