//! Filesystem side of a submission

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Trait for creating the target file and its parent directories
///
/// Both operations are idempotent: anything that already exists is success.
pub trait FileCreator: Send + Sync {
    /// Create `path` and any missing ancestors
    fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Create an empty file at `path` unless something already exists there
    fn ensure_file(&self, path: &Path) -> Result<()>;
}

/// Creates files and directories on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileCreator;

impl FsFileCreator {
    pub fn new() -> Self {
        Self
    }
}

impl FileCreator for FsFileCreator {
    fn ensure_directory(&self, path: &Path) -> Result<()> {
        match fs::create_dir_all(path) {
            Ok(()) => Ok(()),
            // Lost a race against another process creating the same directory
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn ensure_file(&self, path: &Path) -> Result<()> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => {
                debug!("Created empty file {}", path.display());
                Ok(())
            }
            // Existing entries are left untouched, whatever they are
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_directory_creates_ancestors() {
        let tmp = tempfile::tempdir().unwrap();
        let deep = tmp.path().join("a").join("b").join("c");

        FsFileCreator::new().ensure_directory(&deep).unwrap();
        assert!(deep.is_dir());
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let creator = FsFileCreator::new();

        creator.ensure_directory(tmp.path()).unwrap();
        creator.ensure_directory(tmp.path()).unwrap();
    }

    #[test]
    fn test_ensure_file_creates_empty_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("new.txt");

        FsFileCreator::new().ensure_file(&file).unwrap();
        assert!(file.is_file());
        assert_eq!(fs::metadata(&file).unwrap().len(), 0);
    }

    #[test]
    fn test_ensure_file_keeps_existing_content() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("keep.txt");
        fs::write(&file, b"hello").unwrap();

        FsFileCreator::new().ensure_file(&file).unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"hello");
    }

    #[test]
    fn test_ensure_file_leaves_directory_alone() {
        let tmp = tempfile::tempdir().unwrap();

        FsFileCreator::new().ensure_file(tmp.path()).unwrap();
        assert!(tmp.path().is_dir());
    }
}
