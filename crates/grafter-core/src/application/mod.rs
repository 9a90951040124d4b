//! Application layer for Grafter.
//!
//! This layer contains:
//! - **Services**: use case orchestration (ManifestEditor, PluginRegistrar)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no merge
//! rules itself. All merge and detection rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ManifestEditor, PluginRegistrar, Registration};

// Re-export port traits (for adapter implementation)
pub use ports::{FileTree, PackageInstaller, SourceFormatter};

pub use error::ApplicationError;
