//! Infrastructure adapters for Grafter.
//!
//! This crate implements the ports defined in
//! `grafter-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod actions;
pub mod file_tree;

// Re-export commonly used adapters
pub use actions::{NoopFormatter, NoopInstaller, ProcessFormatter, ProcessInstaller};
pub use file_tree::{LocalFileTree, MemoryFileTree};
