//! Directory completion for the path prompt
//!
//! Completion is driven by a two-state machine. Appending the trigger
//! character to the buffer enters completion mode and freezes the typed text
//! as the completion base; every further trigger press replaces the buffer with
//! the next subdirectory matching the base, wrapping after the last one. Any
//! other edit leaves completion mode.
//!
//! # Architecture
//!
//! - **FSM**: `CompletionState`, the mode plus the data only valid inside it
//! - **Lister**: `PathLister`, reads subdirectory names
//! - **Engine**: `CompletionEngine`, picks the next candidate
//!
//! # Examples
//!
//! ```no_run
//! use quicknew::paths::PathResolver;
//! use quicknew::prompt::completion::{CompletionEngine, FsPathLister};
//! use std::sync::Arc;
//!
//! let mut engine = CompletionEngine::new(Arc::new(FsPathLister::new()), PathResolver::new());
//!
//! let buffer = "/usr/l\t";
//! engine.transition(buffer);
//! // Some("/usr/lib/") on a typical system
//! let replacement = engine.complete(buffer);
//! ```

mod engine;
mod fsm;
mod lister;

pub use engine::CompletionEngine;
pub use fsm::CompletionState;
pub use lister::{FsPathLister, PathLister};
