//! Path string helpers shared by completion and submission
//!
//! Everything here works on the raw buffer string rather than on
//! [`std::path::Path`], because the buffer may hold trigger characters, a
//! leading `~`, or a trailing separator that `Path` would normalise away.

mod initial;

pub use initial::initial_buffer;

use std::path::{MAIN_SEPARATOR, Path, PathBuf, is_separator};

/// Character that requests directory completion when it ends the buffer.
pub const TRIGGER: char = '\t';

/// Leading token that stands for the user's home directory.
pub const HOME_TOKEN: &str = "~";

/// Remove every trigger character from `s`.
///
/// Used before a buffer is treated as a filesystem path so the trigger can
/// never leak into a created directory or file name.
pub fn strip_trigger(s: &str) -> String {
    s.replace(TRIGGER, "")
}

/// Check whether `s` ends with the trigger character.
pub fn ends_with_trigger(s: &str) -> bool {
    s.ends_with(TRIGGER)
}

/// Split a path into `(directory, leaf)` at the final separator.
///
/// Redundant separators at the end of the directory part are dropped unless
/// the directory is the root itself. An empty directory means the current
/// directory.
///
/// # Examples
/// ```
/// use quicknew::paths::split;
///
/// assert_eq!(split("/tmp/notes.txt"), ("/tmp".to_string(), "notes.txt".to_string()));
/// assert_eq!(split("/notes.txt"), ("/".to_string(), "notes.txt".to_string()));
/// assert_eq!(split("notes.txt"), (String::new(), "notes.txt".to_string()));
/// ```
pub fn split(path: &str) -> (String, String) {
    let Some(idx) = path.rfind(is_separator) else {
        return (String::new(), path.to_string());
    };

    // Separators are ASCII, so the leaf starts one byte later.
    let head = &path[..=idx];
    let leaf = &path[idx + 1..];
    let trimmed = head.trim_end_matches(is_separator);
    let directory = if trimmed.is_empty() { head } else { trimmed };

    (directory.to_string(), leaf.to_string())
}

/// Join `name` onto `directory` with exactly one separator between them.
pub fn join(directory: &str, name: &str) -> String {
    if directory.is_empty() {
        name.to_string()
    } else if directory.ends_with(is_separator) {
        format!("{directory}{name}")
    } else {
        format!("{directory}{MAIN_SEPARATOR}{name}")
    }
}

/// Append a separator unless `path` already ends with one.
pub fn with_trailing_separator(path: &str) -> String {
    if path.ends_with(is_separator) {
        path.to_string()
    } else {
        format!("{path}{MAIN_SEPARATOR}")
    }
}

/// Expands the home token in user-typed paths.
///
/// The home directory is resolved once at construction; it is `None` when the
/// platform cannot report one, in which case expansion is a no-op.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: Option<PathBuf>,
}

impl PathResolver {
    /// Create a resolver using the current user's home directory
    pub fn new() -> Self {
        Self::with_home(dirs::home_dir())
    }

    /// Create a resolver with an explicit home directory
    pub fn with_home(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Replace a leading `~` with the home directory.
    ///
    /// Only the token itself is replaced; whatever follows it is kept
    /// verbatim, so `~/src` becomes `/home/me/src` and `~sub` becomes
    /// `/home/mesub`.
    pub fn expand_home(&self, path: &str) -> String {
        match (path.strip_prefix(HOME_TOKEN), &self.home) {
            (Some(rest), Some(home)) => format!("{}{rest}", home.to_string_lossy()),
            _ => path.to_string(),
        }
    }

    /// Expand a completion base before it is split.
    ///
    /// A bare `~` gains a trailing separator so that completion lists the
    /// home directory itself instead of its parent.
    pub fn expand_completion_base(&self, base: &str) -> String {
        match &self.home {
            Some(home) if base == HOME_TOKEN => {
                with_trailing_separator(&home.to_string_lossy())
            }
            _ => self.expand_home(base),
        }
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PathResolver {
        PathResolver::with_home(Some(PathBuf::from("/home/me")))
    }

    #[test]
    fn test_strip_trigger_removes_every_occurrence() {
        assert_eq!(strip_trigger("/tmp/a\tb\t"), "/tmp/ab");
        assert_eq!(strip_trigger("plain"), "plain");
    }

    #[test]
    fn test_split_regular_path() {
        assert_eq!(split("/tmp/dir/file.rs"), ("/tmp/dir".into(), "file.rs".into()));
    }

    #[test]
    fn test_split_trailing_separator_gives_empty_leaf() {
        assert_eq!(split("/tmp/dir/"), ("/tmp/dir".into(), String::new()));
    }

    #[test]
    fn test_split_keeps_root() {
        assert_eq!(split("/file"), ("/".into(), "file".into()));
        assert_eq!(split("/"), ("/".into(), String::new()));
    }

    #[test]
    fn test_split_collapses_repeated_separators() {
        assert_eq!(split("a//b"), ("a".into(), "b".into()));
    }

    #[test]
    fn test_split_without_separator() {
        assert_eq!(split("foo"), (String::new(), "foo".into()));
        assert_eq!(split(""), (String::new(), String::new()));
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "bar"), "bar");
        assert_eq!(join("/", "bar"), "/bar");
        assert_eq!(join("/tmp", "bar"), format!("/tmp{MAIN_SEPARATOR}bar"));
    }

    #[test]
    fn test_expand_home_token_only() {
        let r = resolver();
        assert_eq!(r.expand_home("~/src"), "/home/me/src");
        assert_eq!(r.expand_home("~sub"), "/home/mesub");
        assert_eq!(r.expand_home("/abs/~"), "/abs/~");
    }

    #[test]
    fn test_expand_home_without_home_is_noop() {
        let r = PathResolver::with_home(None);
        assert_eq!(r.expand_home("~/src"), "~/src");
        assert_eq!(r.expand_completion_base("~"), "~");
    }

    #[test]
    fn test_expand_completion_base_bare_token_gets_separator() {
        let r = resolver();
        assert_eq!(r.expand_completion_base("~"), format!("/home/me{MAIN_SEPARATOR}"));
        assert_eq!(r.expand_completion_base("~/Do"), "/home/me/Do");
    }
}
