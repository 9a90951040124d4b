//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "grafter",
    bin_name = "grafter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Manifest and plugin registry editing for JS monorepos",
    long_about = "Grafter edits package.json dependency sections and registers \
                  workspace plugins, preserving every field it does not own.",
    after_help = "EXAMPLES:\n\
        \x20 grafter add express@^4.18.0 cors\n\
        \x20 grafter add jest@^29 --dev --manifest apps/api/package.json\n\
        \x20 grafter register @scope/x-prisma --option schema=./prisma/schema.prisma\n\
        \x20 grafter list --manifest package.json --format json\n\
        \x20 grafter completions bash > /usr/share/bash-completion/completions/grafter",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add dependencies to a manifest.
    #[command(
        visible_alias = "a",
        about = "Add dependencies to a manifest",
        after_help = "EXAMPLES:\n\
            \x20 grafter add express@^4.18.0\n\
            \x20 grafter add jest@^29 ts-jest --dev\n\
            \x20 grafter add @nestjs/graphql --manifest apps/api/package.json --no-install"
    )]
    Add(AddArgs),

    /// Register a plugin in the workspace registry.
    #[command(
        visible_alias = "reg",
        about = "Register a workspace plugin",
        after_help = "EXAMPLES:\n\
            \x20 grafter register @scope/x-prisma\n\
            \x20 grafter register @scope/x-uikit --option stylePreprocessor=scss\n\
            \x20 grafter register @scope/x-utils --registry nx.json"
    )]
    Register(RegisterArgs),

    /// List the dependencies a manifest declares.
    #[command(
        visible_alias = "ls",
        about = "List manifest dependencies",
        after_help = "EXAMPLES:\n\
            \x20 grafter list\n\
            \x20 grafter list --dev\n\
            \x20 grafter list --manifest apps/api/package.json --format json"
    )]
    List(ListArgs),

    /// Initialise a Grafter configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 grafter init           # default location\n\
            \x20 grafter init --global  # global config\n\
            \x20 grafter init --local   # local config in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 grafter completions bash > ~/.local/share/bash-completion/completions/grafter\n\
            \x20 grafter completions zsh  > ~/.zfunc/_grafter\n\
            \x20 grafter completions fish > ~/.config/fish/completions/grafter.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Grafter configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 grafter config get defaults.manifest\n\
            \x20 grafter config set actions.install_command \"pnpm install\"\n\
            \x20 grafter config list"
    )]
    Config(ConfigCommands),
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `grafter add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Packages to add, each as `name` or `name@spec`.  Scoped names work
    /// because only the last `@` past the first character splits.
    #[arg(
        value_name = "PACKAGE",
        required = true,
        help = "Packages to add (name or name@spec)"
    )]
    pub packages: Vec<String>,

    /// Stage into `devDependencies` instead of `dependencies`.
    #[arg(short = 'D', long = "dev", help = "Add as development dependencies")]
    pub dev: bool,

    /// Target manifest file.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Manifest to edit (default from config, usually package.json)"
    )]
    pub manifest: Option<PathBuf>,

    /// Skip the package-manager install step.
    #[arg(long = "no-install", help = "Do not run the install command")]
    pub no_install: bool,

    /// Skip the formatter step.
    #[arg(long = "no-format", help = "Do not run the format command")]
    pub no_format: bool,

    /// Stage and validate without touching the file.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,
}

// ── register ──────────────────────────────────────────────────────────────────

/// Arguments for `grafter register`.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Plugin package name.
    #[arg(value_name = "PLUGIN", help = "Plugin package name")]
    pub plugin: String,

    /// Registry file to edit.
    #[arg(
        short = 'r',
        long = "registry",
        value_name = "FILE",
        help = "Registry to edit (default from config, usually workspace.json)"
    )]
    pub registry: Option<PathBuf>,

    /// Plugin options as `key=value` pairs.  Values parse as JSON when they
    /// can, otherwise they stay strings.
    #[arg(
        short = 'o',
        long = "option",
        value_name = "KEY=VALUE",
        help = "Plugin option (repeatable)"
    )]
    pub options: Vec<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `grafter list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Manifest file to read.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Manifest to read (default from config)"
    )]
    pub manifest: Option<PathBuf>,

    /// Show only `devDependencies`.
    #[arg(short = 'D', long = "dev", help = "Show only development dependencies")]
    pub dev: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object per section.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `grafter init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.grafter.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `grafter completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `grafter config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.manifest`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
