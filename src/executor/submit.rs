//! Turning a submitted buffer into a file on disk

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use super::creator::FileCreator;
use crate::error::{Result, SubmitError};
use crate::paths::{self, PathResolver};

/// Validated destination of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTarget {
    /// Directory that will hold the file
    pub directory: PathBuf,
    /// Full path of the file
    pub file: PathBuf,
}

/// Validates submitted paths and creates the files they name
pub struct SubmitExecutor {
    /// Home expansion for submitted paths
    resolver: PathResolver,

    /// Filesystem backend
    creator: Arc<dyn FileCreator>,

    /// Directory relative input is resolved against
    base_dir: PathBuf,
}

impl SubmitExecutor {
    /// Create a new submit executor
    ///
    /// # Arguments
    /// * `resolver` - Home directory expansion
    /// * `creator` - Backend creating directories and files
    /// * `base_dir` - Directory that relative paths are resolved against
    pub fn new(resolver: PathResolver, creator: Arc<dyn FileCreator>, base_dir: PathBuf) -> Self {
        Self {
            resolver,
            creator,
            base_dir,
        }
    }

    /// Validate a raw buffer without touching the filesystem
    ///
    /// Checks run in this order: empty input, a non-directory in the way of
    /// the target directory, empty file name.
    pub fn resolve(&self, raw: &str) -> Result<SubmitTarget> {
        if raw.is_empty() {
            return Err(SubmitError::EmptyInput.into());
        }

        let cleaned = self.resolver.expand_home(&paths::strip_trigger(raw));
        let (directory, leaf) = paths::split(&cleaned);
        let directory = if directory.is_empty() {
            self.base_dir.clone()
        } else {
            self.base_dir.join(directory)
        };

        if let Some(blocker) = first_non_directory(&directory) {
            return Err(SubmitError::DirectoryIsFile(blocker).into());
        }

        if leaf.is_empty() {
            return Err(SubmitError::EmptyFilename.into());
        }

        Ok(SubmitTarget {
            file: directory.join(leaf),
            directory,
        })
    }

    /// Validate a raw buffer, then create its directory and file
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the (possibly pre-existing) file
    pub fn submit(&self, raw: &str) -> Result<PathBuf> {
        let target = self.resolve(raw)?;

        self.creator.ensure_directory(&target.directory)?;
        self.creator.ensure_file(&target.file)?;

        info!("Ready: {}", target.file.display());
        Ok(target.file)
    }
}

/// Nearest existing ancestor of `directory` (itself included) if it is not a
/// directory
fn first_non_directory(directory: &Path) -> Option<PathBuf> {
    directory
        .ancestors()
        .find_map(|ancestor| fs::metadata(ancestor).ok().map(|meta| (ancestor, meta)))
        .filter(|(_, meta)| !meta.is_dir())
        .map(|(ancestor, _)| ancestor.to_path_buf())
}
