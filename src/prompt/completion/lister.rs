//! Subdirectory listing for completion candidates
//!
//! This module provides the trait the engine reads directories through, and
//! the filesystem-backed implementation used by the prompt.

use std::fs;
use std::io;
use std::path::Path;

use tracing::trace;

use crate::error::CompletionError;

/// Trait for listing the immediate subdirectories of a directory
pub trait PathLister: Send + Sync {
    /// Get the names of the subdirectories directly inside `directory`
    ///
    /// Order is unspecified. Fails with
    /// [`CompletionError::DirectoryUnavailable`] when `directory` does not
    /// exist, is not a directory, or cannot be read.
    fn list_subdirectories(&self, directory: &Path) -> Result<Vec<String>, CompletionError>;
}

/// Lists subdirectories straight from the filesystem
///
/// Symlinks to directories count as directories. Entries whose names are not
/// valid UTF-8 are skipped since they cannot be put back into the text buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathLister;

impl FsPathLister {
    pub fn new() -> Self {
        Self
    }
}

impl PathLister for FsPathLister {
    fn list_subdirectories(&self, directory: &Path) -> Result<Vec<String>, CompletionError> {
        let unavailable = |source: io::Error| CompletionError::DirectoryUnavailable {
            path: directory.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(directory).map_err(unavailable)? {
            let entry = entry.map_err(unavailable)?;
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => trace!("Skipping non UTF-8 directory name {:?}", raw),
            }
        }

        Ok(names)
    }
}
