//! Install and format side-effect adapters.
//!
//! - [`ProcessInstaller`] / [`ProcessFormatter`] - production, spawn a
//!   configured command
//! - [`NoopInstaller`] / [`NoopFormatter`] - testing and the CLI's
//!   `--no-install` / `--no-format` flags

pub mod format;
pub mod install;

pub use format::{NoopFormatter, ProcessFormatter};
pub use install::{NoopInstaller, ProcessInstaller};
