use std::path::PathBuf;
use std::{fmt, io};

/// Crate-wide `Result` type using [`QuickNewError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, QuickNewError>;

/// Top-level error type for quicknew operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum QuickNewError {
    /// Submitted path was rejected before anything was created.
    Submit(SubmitError),

    /// Directory completion errors.
    Completion(CompletionError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Validation failures raised when a path is submitted.
///
/// All of these leave the prompt open; no file or directory is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The submitted buffer was empty.
    EmptyInput,

    /// The path ends in a separator, so there is no file name.
    EmptyFilename,

    /// A path component that should be a directory exists as something else.
    DirectoryIsFile(PathBuf),
}

/// Completion-time errors.
#[derive(Debug)]
pub enum CompletionError {
    /// Directory does not exist, is not a directory, or cannot be read.
    DirectoryUnavailable { path: PathBuf, source: io::Error },
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for QuickNewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuickNewError::Submit(e) => write!(f, "{e}"),
            QuickNewError::Completion(e) => write!(f, "Completion error: {e}"),
            QuickNewError::Config(e) => write!(f, "Configuration error: {e}"),
            QuickNewError::Io(e) => write!(f, "I/O error: {e}"),
            QuickNewError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::EmptyInput => write!(f, "Empty input"),
            SubmitError::EmptyFilename => write!(f, "Empty filename"),
            SubmitError::DirectoryIsFile(_) => {
                write!(f, "Directory path exists, but isn't a directory")
            }
        }
    }
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::DirectoryUnavailable { path, source } => {
                write!(f, "Cannot list '{}': {source}", path.display())
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for QuickNewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuickNewError::Io(e) => Some(e),
            QuickNewError::Completion(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for SubmitError {}

impl std::error::Error for CompletionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompletionError::DirectoryUnavailable { source, .. } => Some(source),
        }
    }
}

impl std::error::Error for ConfigError {}

/* ========================= Conversions to QuickNewError ========================= */

impl From<io::Error> for QuickNewError {
    fn from(err: io::Error) -> Self {
        QuickNewError::Io(err)
    }
}

impl From<SubmitError> for QuickNewError {
    fn from(err: SubmitError) -> Self {
        QuickNewError::Submit(err)
    }
}

impl From<CompletionError> for QuickNewError {
    fn from(err: CompletionError) -> Self {
        QuickNewError::Completion(err)
    }
}

impl From<ConfigError> for QuickNewError {
    fn from(err: ConfigError) -> Self {
        QuickNewError::Config(err)
    }
}

impl From<String> for QuickNewError {
    fn from(msg: String) -> Self {
        QuickNewError::Generic(msg)
    }
}

impl From<&str> for QuickNewError {
    fn from(msg: &str) -> Self {
        QuickNewError::Generic(msg.to_owned())
    }
}
