//! Domain-level errors.
//!
//! These represent violations of the rules the manifest and registry types
//! enforce, independent of any file I/O.

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The editor was asked to persist without a usable target path.
    #[error("manifest target path is empty")]
    EmptyTargetPath,

    /// A staged dependency has an empty package name.
    #[error("empty package name staged in {section}")]
    EmptyPackageName { section: String },

    /// A staged plugin option has an empty key.
    #[error("plugin '{plugin}' has an option with an empty key")]
    EmptyOptionKey { plugin: String },

    /// Manifest text was not a JSON object, or a dependency section holds
    /// something other than an object.
    #[error("invalid manifest: {reason}")]
    InvalidManifest { reason: String },

    /// Registry text was not a JSON object, or `plugins` holds something
    /// other than an array.
    #[error("invalid registry: {reason}")]
    InvalidRegistry { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyTargetPath => vec![
                "Set a manifest path before persisting".into(),
                "Example: editor.target(\"apps/api/package.json\")".into(),
            ],
            Self::EmptyPackageName { section } => vec![
                format!("A dependency staged for '{}' has no name", section),
                "Package names must be non-empty strings".into(),
            ],
            Self::EmptyOptionKey { plugin } => vec![
                format!("An option for plugin '{}' has an empty key", plugin),
                "Option keys must be non-empty strings".into(),
            ],
            Self::InvalidManifest { reason } => vec![
                format!("The manifest could not be understood: {}", reason),
                "The file must be a JSON object".into(),
                "Fix the file by hand or delete it to start fresh".into(),
            ],
            Self::InvalidRegistry { reason } => vec![
                format!("The registry could not be understood: {}", reason),
                "The file must be a JSON object with a 'plugins' array".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyTargetPath | Self::EmptyPackageName { .. } | Self::EmptyOptionKey { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidManifest { .. } | Self::InvalidRegistry { .. } => ErrorCategory::Parse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Parse,
}
