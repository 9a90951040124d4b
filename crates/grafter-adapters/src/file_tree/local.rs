//! Local file tree adapter using std::fs.

use std::io;
use std::path::Path;

use grafter_core::{application::ports::FileTree, error::GraftResult};

/// Production file tree backed by `std::fs`.
///
/// Relative paths resolve against the process working directory.
#[derive(Debug, Clone, Copy)]
pub struct LocalFileTree;

impl LocalFileTree {
    /// Create a new local file tree adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTree for LocalFileTree {
    fn read_file(&self, path: &Path) -> GraftResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "read file")),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> GraftResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        if path.as_os_str().is_empty() || path == Path::new(".") {
            return true;
        }
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> grafter_core::error::GraftError {
    use grafter_core::application::ApplicationError;

    ApplicationError::FileTreeError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let tree = LocalFileTree::new();
        let result = tree
            .read_file(Path::new("definitely/not/here/package.json"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn empty_path_is_the_tree_root() {
        let tree = LocalFileTree::new();
        assert!(tree.dir_exists(Path::new("")));
        assert!(tree.dir_exists(Path::new(".")));
    }
}
