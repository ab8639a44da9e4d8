//! Error handling module for quicknew.
//!
//! All errors funnel into [`QuickNewError`]. Submit validation failures
//! ([`SubmitError`]) are recoverable: the prompt shows their message and stays
//! open. Completion listing failures ([`CompletionError`]) never reach the user;
//! the engine treats them as "no candidates".
//!
//! # Example
//!
//! ```rust,no_run
//! use quicknew::error::{Result, SubmitError};
//!
//! fn check(input: &str) -> Result<()> {
//!     if input.is_empty() {
//!         return Err(SubmitError::EmptyInput.into());
//!     }
//!     Ok(())
//! }
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{CompletionError, ConfigError, QuickNewError, Result, SubmitError};
