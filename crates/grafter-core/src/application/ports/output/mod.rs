//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the editor and registrar need from the outside
//! world. The `grafter-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::GraftResult;

#[cfg(test)]
use mockall::automock;

/// Port for reading and writing workspace files.
///
/// Implemented by:
/// - `grafter_adapters::file_tree::LocalFileTree` (production)
/// - `grafter_adapters::file_tree::MemoryFileTree` (testing)
///
/// ## Design notes
///
/// - `read_file` returns `Ok(None)` for a missing file; callers decide
///   whether that is an error. Missing *parent directories* are checked
///   separately via `dir_exists`.
/// - Paths may be relative; they resolve against the process working
///   directory (local adapter) or the tree root (memory adapter).
#[cfg_attr(test, automock)]
pub trait FileTree: Send + Sync {
    /// Read a file's content, or `None` if it does not exist.
    fn read_file(&self, path: &Path) -> GraftResult<Option<String>>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> GraftResult<()>;

    /// Check if a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a directory exists. The empty path and `.` are the tree
    /// root and always exist.
    fn dir_exists(&self, path: &Path) -> bool;
}

/// Port for the package-installation side effect that follows a manifest
/// write.
///
/// Implemented by:
/// - `grafter_adapters::actions::ProcessInstaller` (production)
/// - `grafter_adapters::actions::NoopInstaller` (testing, `--no-install`)
#[cfg_attr(test, automock)]
pub trait PackageInstaller: Send + Sync {
    /// Install the dependencies declared in the manifest at `manifest_path`.
    fn install(&self, manifest_path: &Path) -> GraftResult<()>;
}

/// Port for the source-formatting side effect.
///
/// Implemented by:
/// - `grafter_adapters::actions::ProcessFormatter` (production)
/// - `grafter_adapters::actions::NoopFormatter` (testing, `--no-format`)
#[cfg_attr(test, automock)]
pub trait SourceFormatter: Send + Sync {
    /// Reformat the given files.
    fn format(&self, paths: &[PathBuf]) -> GraftResult<()>;
}
