//! Manifest editor - accumulate dependency requirements, apply them once.
//!
//! The editor is a fluent builder. Chainable methods stage entries in
//! memory; [`ManifestEditor::persist`] performs the single
//! read-merge-write against the target manifest, then runs the install and
//! format actions. There is no rollback: once the write commits, side
//! effect failures propagate without touching the file again.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{FileTree, PackageInstaller, SourceFormatter},
    },
    domain::{DependencySet, Manifest, Section},
    error::{GraftError, GraftResult},
};

/// Default manifest path when the caller never sets one.
const DEFAULT_TARGET: &str = "package.json";

/// Fluent editor for a dependency manifest.
///
/// # Example
///
/// ```rust,no_run
/// # use grafter_core::application::ManifestEditor;
/// # fn demo(tree: Box<dyn grafter_core::application::ports::FileTree>,
/// #         installer: Box<dyn grafter_core::application::ports::PackageInstaller>,
/// #         formatter: Box<dyn grafter_core::application::ports::SourceFormatter>)
/// #         -> grafter_core::error::GraftResult<()> {
/// ManifestEditor::new(tree, installer, formatter)
///     .target("apps/api/package.json")
///     .add_dependency("react", "^18.0.0")
///     .add_dev_dependency("typescript", "^5.0.0")
///     .persist()?;
/// # Ok(())
/// # }
/// ```
pub struct ManifestEditor {
    tree: Box<dyn FileTree>,
    installer: Box<dyn PackageInstaller>,
    formatter: Box<dyn SourceFormatter>,
    target: PathBuf,
    dependencies: DependencySet,
    dev_dependencies: DependencySet,
}

impl ManifestEditor {
    /// Create an editor with the given adapters. Both dependency sets start
    /// empty; the target defaults to `package.json`.
    pub fn new(
        tree: Box<dyn FileTree>,
        installer: Box<dyn PackageInstaller>,
        formatter: Box<dyn SourceFormatter>,
    ) -> Self {
        Self {
            tree,
            installer,
            formatter,
            target: PathBuf::from(DEFAULT_TARGET),
            dependencies: DependencySet::new(),
            dev_dependencies: DependencySet::new(),
        }
    }

    /// Record which manifest file subsequent operations affect.
    ///
    /// No existence check happens here; emptiness is rejected at persist
    /// time.
    pub fn target(mut self, path: impl Into<PathBuf>) -> Self {
        self.target = path.into();
        self
    }

    /// Insert or overwrite a single production dependency. Last write wins.
    pub fn add_dependency(mut self, name: impl Into<String>, spec: impl Into<String>) -> Self {
        self.dependencies.insert(name, spec);
        self
    }

    /// Insert or overwrite a single development dependency.
    pub fn add_dev_dependency(mut self, name: impl Into<String>, spec: impl Into<String>) -> Self {
        self.dev_dependencies.insert(name, spec);
        self
    }

    /// Bulk variant of [`Self::add_dependency`]; later keys overwrite
    /// earlier ones on collision.
    pub fn add_dependencies<I, K, V>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.dependencies.extend(deps);
        self
    }

    /// Bulk variant of [`Self::add_dev_dependency`].
    pub fn add_dev_dependencies<I, K, V>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.dev_dependencies.extend(deps);
        self
    }

    /// Empty both staged sets without touching the target path.
    pub fn clear(mut self) -> Self {
        self.dependencies.clear();
        self.dev_dependencies.clear();
        self
    }

    /// Number of staged entries as `(production, development)`.
    pub fn staged(&self) -> (usize, usize) {
        (self.dependencies.len(), self.dev_dependencies.len())
    }

    /// Merge the staged sets into the target manifest and write it back.
    ///
    /// A missing target file over an existing parent directory is an empty
    /// base — create-or-update semantics. A missing parent directory is
    /// [`ApplicationError::ManifestNotFound`]; unparseable existing content
    /// is [`ApplicationError::ManifestParse`]. Both are fatal, no retry.
    #[instrument(skip_all, fields(manifest = %self.target.display()))]
    pub fn update_manifest(&self) -> GraftResult<()> {
        if self.target.as_os_str().is_empty() {
            return Err(crate::domain::DomainError::EmptyTargetPath.into());
        }
        self.dependencies
            .validate(Section::Production.key())
            .map_err(GraftError::Domain)?;
        self.dev_dependencies
            .validate(Section::Development.key())
            .map_err(GraftError::Domain)?;

        if let Some(parent) = self.target.parent() {
            if !parent.as_os_str().is_empty() && !self.tree.dir_exists(parent) {
                return Err(ApplicationError::ManifestNotFound {
                    path: self.target.clone(),
                }
                .into());
            }
        }

        let mut manifest = match self.tree.read_file(&self.target)? {
            Some(text) => Manifest::parse(&text).map_err(|e| ApplicationError::ManifestParse {
                path: self.target.clone(),
                reason: e.to_string(),
            })?,
            None => {
                debug!("Target manifest missing, starting from an empty base");
                Manifest::new()
            }
        };

        manifest.merge_section(Section::Production, &self.dependencies)?;
        manifest.merge_section(Section::Development, &self.dev_dependencies)?;

        self.tree
            .write_file(&self.target, &manifest.to_pretty_string()?)?;

        info!(
            dependencies = self.dependencies.len(),
            dev_dependencies = self.dev_dependencies.len(),
            "Manifest updated"
        );
        Ok(())
    }

    /// Update the manifest, then install declared dependencies and reformat
    /// the touched file.
    ///
    /// The side effects run sequentially after the write has committed; if
    /// either fails, the error propagates unchanged and the manifest stays
    /// as written.
    #[instrument(skip_all, fields(manifest = %self.target.display()))]
    pub fn persist(&self) -> GraftResult<()> {
        self.update_manifest()?;

        if let Err(e) = self.installer.install(&self.target) {
            warn!(error = %e, "Install failed after manifest write; no rollback");
            return Err(e);
        }

        if let Err(e) = self.formatter.format(std::slice::from_ref(&self.target)) {
            warn!(error = %e, "Format failed after manifest write; no rollback");
            return Err(e);
        }

        info!("Persist completed");
        Ok(())
    }

    /// The manifest path currently targeted.
    pub fn target_path(&self) -> &Path {
        &self.target
    }
}
