//! In-memory file tree adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use grafter_core::application::ports::FileTree;

/// In-memory file tree for testing.
///
/// Cloning shares the underlying storage, so a test can hand one handle to
/// an editor and keep another for assertions. Writing requires the parent
/// directory to exist, mirroring the local adapter's observable behavior.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileTree {
    inner: Arc<RwLock<MemoryFileTreeInner>>,
}

#[derive(Debug, Default)]
struct MemoryFileTreeInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFileTree {
    /// Create a new empty memory tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory and all its ancestors (testing helper).
    pub fn create_dir_all(&self, path: &Path) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn seed_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent);
        }
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.files.insert(path.to_path_buf(), content.to_string());
    }

    /// List all file paths currently stored.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.files.keys().cloned().collect()
    }
}

impl FileTree for MemoryFileTree {
    fn read_file(&self, path: &Path) -> grafter_core::error::GraftResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| grafter_core::application::ApplicationError::TreeLock)?;
        Ok(inner.files.get(path).cloned())
    }

    fn write_file(&self, path: &Path, content: &str) -> grafter_core::error::GraftResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| grafter_core::application::ApplicationError::TreeLock)?;

        // Parent must exist, same as the local adapter.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(grafter_core::application::ApplicationError::FileTreeError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = match self.inner.read() {
            Ok(inner) => inner,
            Err(_) => return false,
        };
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        if path.as_os_str().is_empty() || path == Path::new(".") {
            return true;
        }
        let inner = match self.inner.read() {
            Ok(inner) => inner,
            Err(_) => return false,
        };
        inner.directories.contains(path)
            || inner.files.keys().any(|file| file.starts_with(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let tree = MemoryFileTree::new();
        assert!(tree.write_file(Path::new("apps/api/package.json"), "{}").is_err());

        tree.create_dir_all(Path::new("apps/api"));
        assert!(tree.write_file(Path::new("apps/api/package.json"), "{}").is_ok());
    }

    #[test]
    fn root_level_write_needs_no_directories() {
        let tree = MemoryFileTree::new();
        assert!(tree.write_file(Path::new("package.json"), "{}").is_ok());
        assert_eq!(
            tree.read_file(Path::new("package.json")).unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn clones_share_storage() {
        let tree = MemoryFileTree::new();
        let handle = tree.clone();
        tree.seed_file(Path::new("nx.json"), r#"{"plugins": []}"#);
        assert!(handle.exists(Path::new("nx.json")));
    }

    #[test]
    fn dir_exists_inferred_from_seeded_files() {
        let tree = MemoryFileTree::new();
        tree.seed_file(Path::new("libs/shared/package.json"), "{}");
        assert!(tree.dir_exists(Path::new("libs/shared")));
        assert!(!tree.dir_exists(Path::new("libs/other")));
    }
}
