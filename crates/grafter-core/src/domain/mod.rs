//! Core domain layer for Grafter.
//!
//! Pure data and merge rules, no I/O. Reading and writing the files these
//! types describe happens through ports (traits) defined in the application
//! layer.
//!
//! - **No async**: everything here is synchronous
//! - **No filesystem**: parsing takes text, rendering returns text
//! - **Immutable-ish**: all types are `Clone + PartialEq`; mutation is
//!   explicit and local

pub mod dependency;
pub mod error;
pub mod manifest;
pub mod registry;

pub use dependency::DependencySet;
pub use error::{DomainError, ErrorCategory};
pub use manifest::{Manifest, Section};
pub use registry::{PluginOptions, Registry};
