//! Command handlers.
//!
//! One module per subcommand. Each exposes a single `execute` function that
//! receives its parsed args plus whatever context it needs.

pub mod add;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod register;
