//! Source-formatting actions.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use grafter_core::{
    application::{ApplicationError, ports::SourceFormatter},
    error::GraftResult,
};

/// Runs a configured formatter command (e.g. `npx prettier --write`) with
/// the touched file paths appended as arguments.
#[derive(Debug, Clone)]
pub struct ProcessFormatter {
    command: String,
}

impl ProcessFormatter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl SourceFormatter for ProcessFormatter {
    fn format(&self, paths: &[PathBuf]) -> GraftResult<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut words = self.command.split_whitespace();
        let program = words.next().ok_or_else(|| ApplicationError::FormatFailed {
            command: self.command.clone(),
            reason: "format command is empty".into(),
        })?;

        debug!(command = %self.command, files = paths.len(), "Running formatter");
        let status = Command::new(program)
            .args(words)
            .args(paths)
            .status()
            .map_err(|e| ApplicationError::FormatFailed {
                command: self.command.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(ApplicationError::FormatFailed {
                command: self.command.clone(),
                reason: format!("exited with {status}"),
            }
            .into());
        }

        info!(command = %self.command, "Format completed");
        Ok(())
    }
}

/// Does nothing, successfully. Used by tests and `--no-format`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl NoopFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl SourceFormatter for NoopFormatter {
    fn format(&self, paths: &[PathBuf]) -> GraftResult<()> {
        debug!(files = paths.len(), "Format skipped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_paths_is_a_noop() {
        let formatter = ProcessFormatter::new("definitely-not-a-real-binary-xyz --write");
        assert!(formatter.format(&[]).is_ok());
    }

    #[test]
    fn missing_program_is_format_failed() {
        let formatter = ProcessFormatter::new("definitely-not-a-real-binary-xyz --write");
        let err = formatter.format(&[PathBuf::from("package.json")]).unwrap_err();
        assert!(matches!(
            err,
            grafter_core::error::GraftError::Application(ApplicationError::FormatFailed { .. })
        ));
    }

    #[test]
    fn noop_always_succeeds() {
        assert!(NoopFormatter::new().format(&[PathBuf::from("x")]).is_ok());
    }
}
