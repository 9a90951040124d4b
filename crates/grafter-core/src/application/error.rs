//! Application layer errors.
//!
//! These represent failures in orchestration — reading, writing, and the
//! install/format side effects. Merge-rule violations are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while applying an edit.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The manifest's parent directory does not exist. The file itself may
    /// be created fresh, but the directory must already be there.
    #[error("manifest not found: parent directory of {path} does not exist")]
    ManifestNotFound { path: PathBuf },

    /// Existing manifest content was unreadable as structured data.
    /// Fatal, no retry.
    #[error("failed to parse manifest at {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// The registry's parent directory does not exist.
    #[error("registry not found: parent directory of {path} does not exist")]
    RegistryNotFound { path: PathBuf },

    /// Existing registry content was unreadable as structured data.
    #[error("failed to parse registry at {path}: {reason}")]
    RegistryParse { path: PathBuf, reason: String },

    /// A file tree operation failed.
    #[error("file tree error at {path}: {reason}")]
    FileTreeError { path: PathBuf, reason: String },

    /// A shared in-memory tree lock was poisoned.
    #[error("file tree lock poisoned")]
    TreeLock,

    /// The package-installation action failed. The manifest write has
    /// already committed when this surfaces — there is no rollback.
    #[error("package installation failed ({command}): {reason}")]
    InstallFailed { command: String, reason: String },

    /// The source-formatting action failed. Same no-rollback rule.
    #[error("source formatting failed ({command}): {reason}")]
    FormatFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestNotFound { path } | Self::RegistryNotFound { path } => vec![
                format!("The parent directory of '{}' does not exist", path.display()),
                "Create the directory first, or check the path for typos".into(),
            ],
            Self::ManifestParse { path, reason } | Self::RegistryParse { path, reason } => vec![
                format!("'{}' exists but is not valid JSON", path.display()),
                format!("Parser said: {}", reason),
                "Fix the file by hand; Grafter will not overwrite unreadable files".into(),
            ],
            Self::FileTreeError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
            ],
            Self::TreeLock => vec![
                "An in-memory file tree lock was poisoned by a panic".into(),
                "Re-run the operation".into(),
            ],
            Self::InstallFailed { command, .. } => vec![
                format!("The install command failed: {}", command),
                "The manifest was already written; re-run the install by hand".into(),
                "Ensure the package manager is installed and on your PATH".into(),
            ],
            Self::FormatFailed { command, .. } => vec![
                format!("The format command failed: {}", command),
                "The manifest was already written; re-run the formatter by hand".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestNotFound { .. } | Self::RegistryNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::ManifestParse { .. } | Self::RegistryParse { .. } => ErrorCategory::Parse,
            Self::FileTreeError { .. } | Self::TreeLock => ErrorCategory::Internal,
            Self::InstallFailed { .. } | Self::FormatFailed { .. } => ErrorCategory::SideEffect,
        }
    }
}
