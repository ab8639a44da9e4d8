//! quicknew library
//!
//! This library provides the pieces behind the `quicknew` binary: a path
//! prompt with Tab completion over subdirectories, and the code that turns a
//! submitted path into a file on disk.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `executor`: Path validation, file creation and opening
//! - `paths`: Path string helpers and home directory expansion
//! - `prompt`: Interactive prompt and completion engine
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use quicknew::executor::{FsFileCreator, SubmitExecutor};
//! use quicknew::paths::PathResolver;
//!
//! fn main() -> quicknew::Result<()> {
//!     let executor = SubmitExecutor::new(
//!         PathResolver::new(),
//!         Arc::new(FsFileCreator::new()),
//!         std::env::current_dir()?,
//!     );
//!
//!     let file = executor.submit("~/notes/today.md")?;
//!     println!("Created {}", file.display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod paths;
pub mod prompt;

// Re-export commonly used types
pub use config::Config;
pub use error::{QuickNewError, Result};
pub use executor::{Opener, SubmitExecutor};
pub use paths::PathResolver;
pub use prompt::completion::{CompletionEngine, CompletionState};
pub use prompt::{PromptEngine, PromptSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
