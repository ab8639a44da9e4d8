//! Initial prompt text

use std::path::{Path, PathBuf};

use super::with_trailing_separator;

/// Pick the text the prompt opens with.
///
/// Priority:
/// 1. Directory of the active document
/// 2. First project folder
/// 3. Home directory
///
/// Each candidate is returned with a trailing separator so the user can start
/// typing a file name straight away. Returns an empty string when none of the
/// sources is available.
pub fn initial_buffer(
    active_document: Option<&Path>,
    project_folders: &[PathBuf],
    home: Option<&Path>,
) -> String {
    let document_dir = active_document
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty());

    document_dir
        .or_else(|| project_folders.first().map(PathBuf::as_path))
        .or(home)
        .map(|dir| with_trailing_separator(&dir.to_string_lossy()))
        .unwrap_or_default()
}
