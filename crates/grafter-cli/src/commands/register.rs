//! `grafter register` - record a plugin in the workspace registry.

use serde_json::Value;

use grafter_adapters::LocalFileTree;
use grafter_core::application::{PluginRegistrar, Registration};

use crate::{
    cli::{GlobalArgs, RegisterArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Register a plugin, idempotently.
pub fn execute(
    args: RegisterArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let registry = args
        .registry
        .clone()
        .unwrap_or_else(|| config.defaults.registry.clone());

    let mut registrar =
        PluginRegistrar::load(Box::new(LocalFileTree::new()), &registry, &args.plugin)?;

    for option in &args.options {
        let (key, value) = parse_option(option)?;
        registrar = registrar.with_option(key, value);
    }

    match registrar.register()? {
        Registration::Added => {
            output.success(&format!(
                "Registered {} in {}",
                args.plugin,
                registry.display()
            ))?;
        }
        Registration::AlreadyRegistered => {
            output.info(&format!(
                "{} is already registered in {}; nothing changed",
                args.plugin,
                registry.display()
            ))?;
        }
    }

    Ok(())
}

/// Split a `KEY=VALUE` option argument.
///
/// The value parses as JSON when it can (`true`, `3`, `["a"]`), and stays a
/// plain string otherwise.
fn parse_option(arg: &str) -> CliResult<(String, Value)> {
    let Some((key, raw)) = arg.split_once('=') else {
        return Err(CliError::InvalidOption {
            argument: arg.into(),
        });
    };
    if key.trim().is_empty() {
        return Err(CliError::InvalidOption {
            argument: arg.into(),
        });
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

// ── tests ─────────────────────────────────────────────────────────────────────
