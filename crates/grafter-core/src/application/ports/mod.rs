//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the application needs from the outside
//! world. Adapters in `grafter-adapters` implement them.
//!
//! ## Port types
//!
//! - **Driven (output) ports**: called by the application, implemented by
//!   infrastructure
//!   - `FileTree`: read/write workspace files
//!   - `PackageInstaller`: install declared dependencies
//!   - `SourceFormatter`: reformat touched files

pub mod output;

pub use output::{FileTree, PackageInstaller, SourceFormatter};
