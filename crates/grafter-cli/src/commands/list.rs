//! `grafter list` - show the dependencies a manifest declares.

use std::path::Path;

use grafter_adapters::LocalFileTree;
use grafter_core::{
    application::{ApplicationError, ports::FileTree},
    domain::{Manifest, Section},
};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// List the dependencies of a manifest.
pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let target = args
        .manifest
        .clone()
        .unwrap_or_else(|| config.defaults.manifest.clone());

    let manifest = read_manifest(&target)?;
    let sections: &[Section] = if args.dev {
        &[Section::Development]
    } else {
        &[Section::Production, Section::Development]
    };

    match args.format {
        ListFormat::Table => {
            for section in sections {
                output.header(&format!("{section}:"))?;
                match manifest.section(*section) {
                    Some(entries) if !entries.is_empty() => {
                        let width = entries.keys().map(String::len).max().unwrap_or(0);
                        for (name, spec) in entries {
                            output.print(&format!(
                                "  {name:<width$}  {}",
                                spec.as_str().unwrap_or("?")
                            ))?;
                        }
                    }
                    _ => output.print("  (none)")?,
                }
            }
        }

        ListFormat::List => {
            for section in sections {
                if let Some(entries) = manifest.section(*section) {
                    for name in entries.keys() {
                        println!("{name}");
                    }
                }
            }
        }

        ListFormat::Json => {
            // Serialise to stdout, bypassing OutputManager: JSON output must
            // be parseable even in non-TTY pipes.
            let mut object = serde_json::Map::new();
            for section in sections {
                let entries = manifest
                    .section(*section)
                    .cloned()
                    .unwrap_or_default();
                object.insert(section.key().to_string(), serde_json::Value::Object(entries));
            }
            let json = serde_json::to_string_pretty(&object).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise dependency list: {e}"),
                source: None,
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("section,name,spec");
            for section in sections {
                if let Some(entries) = manifest.section(*section) {
                    for (name, spec) in entries {
                        println!("{section},{name},{}", spec.as_str().unwrap_or("?"));
                    }
                }
            }
        }
    }

    Ok(())
}

/// Read and parse the manifest. Unlike the editor, a missing file is an
/// error here; there is nothing to list.
fn read_manifest(path: &Path) -> CliResult<Manifest> {
    let tree = LocalFileTree::new();
    let text = tree.read_file(path)?.ok_or_else(|| {
        CliError::Core(
            ApplicationError::ManifestNotFound {
                path: path.to_path_buf(),
            }
            .into(),
        )
    })?;
    Manifest::parse(&text).map_err(|e| CliError::Core(e.into()))
}
