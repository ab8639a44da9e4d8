//! Submission handling for quicknew
//!
//! This module provides everything that happens after the user confirms a
//! path:
//! - Validation of the raw buffer (`SubmitExecutor::resolve`)
//! - Creation of missing directories and the empty file (`FileCreator`)
//! - Opening the result in an editor (`Opener`)

mod creator;
mod opener;
mod submit;

pub use creator::{FileCreator, FsFileCreator};
pub use opener::{OpenOutcome, Opener};
pub use submit::{SubmitExecutor, SubmitTarget};
