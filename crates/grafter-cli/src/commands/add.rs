//! `grafter add` - stage dependencies and persist them to a manifest.

use grafter_adapters::{LocalFileTree, NoopFormatter, NoopInstaller, ProcessFormatter, ProcessInstaller};
use grafter_core::application::{
    ManifestEditor,
    ports::{PackageInstaller, SourceFormatter},
};

use crate::{
    cli::{AddArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Add dependencies to a manifest, then install and format.
pub fn execute(
    args: AddArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let target = args
        .manifest
        .clone()
        .unwrap_or_else(|| config.defaults.manifest.clone());

    let mut editor = ManifestEditor::new(
        Box::new(LocalFileTree::new()),
        installer_for(&args, &config),
        formatter_for(&args, &config),
    )
    .target(&target);

    for package in &args.packages {
        let (name, spec) = parse_package(package)?;
        editor = if args.dev {
            editor.add_dev_dependency(name, spec)
        } else {
            editor.add_dependency(name, spec)
        };
    }

    let (prod, dev) = editor.staged();

    if args.dry_run {
        output.info(&format!(
            "Would stage {prod} dependencies and {dev} devDependencies into {}",
            target.display()
        ))?;
        for package in &args.packages {
            let (name, spec) = parse_package(package)?;
            output.print(&format!("  {name} @ {spec}"))?;
        }
        return Ok(());
    }

    editor.persist()?;

    let section = if args.dev {
        "devDependencies"
    } else {
        "dependencies"
    };
    output.success(&format!(
        "Added {} package(s) to {} in {}",
        prod + dev,
        section,
        target.display()
    ))?;

    Ok(())
}

fn installer_for(args: &AddArgs, config: &AppConfig) -> Box<dyn PackageInstaller> {
    if args.no_install {
        Box::new(NoopInstaller::new())
    } else {
        Box::new(ProcessInstaller::new(config.actions.install_command.clone()))
    }
}

fn formatter_for(args: &AddArgs, config: &AppConfig) -> Box<dyn SourceFormatter> {
    if args.no_format {
        Box::new(NoopFormatter::new())
    } else {
        Box::new(ProcessFormatter::new(config.actions.format_command.clone()))
    }
}

/// Split a `name@spec` argument.
///
/// The split point is the *last* `@` past the first character, so scoped
/// names like `@nestjs/graphql@^12` work. A bare name gets the wildcard
/// spec `*`.
fn parse_package(arg: &str) -> CliResult<(String, String)> {
    let trimmed = arg.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidPackage {
            argument: arg.into(),
            reason: "empty package name".into(),
        });
    }

    // Skip the first character by its UTF-8 width; byte offset 1 would
    // split inside a multi-byte leading character.
    let first = trimmed.chars().next().map(char::len_utf8).unwrap_or(0);
    match trimmed[first..].rfind('@') {
        Some(offset) => {
            let at = first + offset;
            let name = &trimmed[..at];
            let spec = &trimmed[at + 1..];
            if spec.is_empty() {
                return Err(CliError::InvalidPackage {
                    argument: arg.into(),
                    reason: "empty version spec after '@'".into(),
                });
            }
            Ok((name.to_string(), spec.to_string()))
        }
        None => Ok((trimmed.to_string(), "*".to_string())),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
