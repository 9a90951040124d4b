//! Package-installation actions.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use grafter_core::{
    application::{ApplicationError, ports::PackageInstaller},
    error::GraftResult,
};

/// Runs a configured package-manager command (e.g. `npm install`) in the
/// manifest's directory.
#[derive(Debug, Clone)]
pub struct ProcessInstaller {
    command: String,
}

impl ProcessInstaller {
    /// Create an installer for the given shell-less command line. The first
    /// word is the program, the rest are arguments.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl PackageInstaller for ProcessInstaller {
    fn install(&self, manifest_path: &Path) -> GraftResult<()> {
        let mut words = self.command.split_whitespace();
        let program = words.next().ok_or_else(|| ApplicationError::InstallFailed {
            command: self.command.clone(),
            reason: "install command is empty".into(),
        })?;

        let workdir = manifest_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        debug!(command = %self.command, dir = %workdir.display(), "Running install");
        let status = Command::new(program)
            .args(words)
            .current_dir(workdir)
            .status()
            .map_err(|e| ApplicationError::InstallFailed {
                command: self.command.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(ApplicationError::InstallFailed {
                command: self.command.clone(),
                reason: format!("exited with {status}"),
            }
            .into());
        }

        info!(command = %self.command, "Install completed");
        Ok(())
    }
}

/// Does nothing, successfully. Used by tests and `--no-install`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInstaller;

impl NoopInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl PackageInstaller for NoopInstaller {
    fn install(&self, manifest_path: &Path) -> GraftResult<()> {
        debug!(manifest = %manifest_path.display(), "Install skipped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_install_failed() {
        let installer = ProcessInstaller::new("   ");
        let err = installer.install(Path::new("package.json")).unwrap_err();
        assert!(matches!(
            err,
            grafter_core::error::GraftError::Application(ApplicationError::InstallFailed { .. })
        ));
    }

    #[test]
    fn missing_program_is_install_failed() {
        let installer = ProcessInstaller::new("definitely-not-a-real-binary-xyz install");
        assert!(installer.install(Path::new("package.json")).is_err());
    }

    #[test]
    fn noop_always_succeeds() {
        assert!(NoopInstaller::new().install(Path::new("package.json")).is_ok());
    }
}
