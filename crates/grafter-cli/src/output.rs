//! Terminal output for the `grafter` binary.
//!
//! One [`OutputManager`] is built per invocation from the global flags and
//! the loaded config. Normal command output goes to stdout through
//! [`console::Term`]; failures render to stderr via [`OutputManager::failure`]
//! so they survive stdout redirection.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliError;

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto resolves by TTY: Human on a terminal, Plain when piped.
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Colour only when allowed *and* rendering for humans.
    fn styled(&self) -> bool {
        !self.no_color && self.format == OutputFormat::Human
    }

    /// Plain line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.styled() {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        } else {
            format!("\u{2713} {msg}") // ✓
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.styled() {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        } else {
            format!("\u{2139} {msg}") // ℹ
        };
        self.term.write_line(&line)
    }

    /// Bold cyan section header.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.styled() {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }

    /// Render a failed command to stderr. *Never* suppressed: errors must
    /// be visible even in quiet mode.
    pub fn failure(&self, err: &CliError, verbose: bool) -> io::Result<()> {
        let colored = self.styled() && io::stderr().is_terminal();
        let msg = if colored {
            err.format_colored(verbose)
        } else {
            err.format_plain(verbose)
        };
        eprint!("{msg}");
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Plain, // avoid TTY detection in tests
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn failure_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true);
        let err = CliError::UnknownConfigKey { key: "x".into() };
        assert!(out.failure(&err, false).is_ok());
    }

    #[test]
    fn plain_format_never_styles() {
        // Even with colour nominally allowed, a non-Human format stays plain.
        let out = make_manager(false, false);
        assert!(!out.styled());
    }

    #[test]
    fn config_no_color_wins_over_flags() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args, &config);
        assert!(!out.styled());
    }

    #[test]
    fn human_format_with_color_styles() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.styled());
    }
}
