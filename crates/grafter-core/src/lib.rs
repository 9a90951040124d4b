//! Grafter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Grafter, a
//! tool that edits the dependency manifest and plugin registry of a
//! monorepo workspace on behalf of code generators.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           grafter-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ManifestEditor, PluginRegistrar)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (FileTree, PackageInstaller, Formatter) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    grafter-adapters (Infrastructure)    │
//! │  (LocalFileTree, MemoryFileTree, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Manifest, Registry, DependencySet)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use grafter_core::application::ManifestEditor;
//! # fn demo(tree: Box<dyn grafter_core::application::ports::FileTree>,
//! #         installer: Box<dyn grafter_core::application::ports::PackageInstaller>,
//! #         formatter: Box<dyn grafter_core::application::ports::SourceFormatter>)
//! #         -> grafter_core::error::GraftResult<()> {
//! ManifestEditor::new(tree, installer, formatter)
//!     .target("apps/api/package.json")
//!     .add_dev_dependency("@nestjs/graphql", "*")
//!     .persist()?;
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ManifestEditor, PluginRegistrar, Registration,
        ports::{FileTree, PackageInstaller, SourceFormatter},
    };
    pub use crate::domain::{DependencySet, Manifest, PluginOptions, Registry, Section};
    pub use crate::error::{GraftError, GraftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
