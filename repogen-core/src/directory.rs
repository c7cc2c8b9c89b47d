//! Directories that generated files are materialized into.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};

use crate::file::write_file;

/// A directory the generator can check, delete from, and write into.
///
/// The generator only ever addresses files by name, relative to the directory.
/// Implementations must make [`materialize`](TargetDirectory::materialize)
/// all-or-nothing: on error, no partial file may remain.
pub trait TargetDirectory {
    /// Check whether a file with this name exists in the directory.
    fn contains(&self, file_name: &str) -> bool;

    /// Delete an existing file.
    fn delete(&mut self, file_name: &str) -> Result<()>;

    /// Create (or replace) a file with the given content, returning its path.
    fn materialize(&mut self, file_name: &str, content: &str) -> Result<PathBuf>;
}

/// A [`TargetDirectory`] backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct FsDirectory {
    root: PathBuf,
}

impl FsDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory that contains `file`, i.e. where a companion file goes.
    pub fn containing(file: &Path) -> Self {
        match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::new(parent),
            _ => Self::new("."),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute-or-relative path of a file inside this directory.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

impl TargetDirectory for FsDirectory {
    fn contains(&self, file_name: &str) -> bool {
        self.path_of(file_name).is_file()
    }

    fn delete(&mut self, file_name: &str) -> Result<()> {
        let path = self.path_of(file_name);
        std::fs::remove_file(&path)
            .wrap_err_with(|| format!("failed to delete '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "deleted file");
        Ok(())
    }

    fn materialize(&mut self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path_of(file_name);
        write_file(&path, content)?;
        Ok(path)
    }
}
