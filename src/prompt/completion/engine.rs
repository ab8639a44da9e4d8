//! Completion engine - cycles through matching subdirectories
//!
//! The host calls [`CompletionEngine::transition`] and then
//! [`CompletionEngine::complete`] with every buffer snapshot. Outside
//! completion mode `complete` returns `None`, so the host never has to check
//! the state itself.

use std::path::{MAIN_SEPARATOR, Path};
use std::sync::Arc;

use tracing::debug;

use super::fsm::CompletionState;
use super::lister::PathLister;
use crate::paths::{self, PathResolver};

/// Main completion engine
///
/// One engine belongs to one prompt session and is dropped with it.
pub struct CompletionEngine {
    /// Directory listing backend
    lister: Arc<dyn PathLister>,

    /// Home expansion for the completion base
    resolver: PathResolver,

    /// Current completion mode
    state: CompletionState,
}

impl CompletionEngine {
    /// Create a new completion engine
    ///
    /// # Arguments
    /// * `lister` - Backend used to list subdirectories
    /// * `resolver` - Resolver used to expand `~` in the completion base
    pub fn new(lister: Arc<dyn PathLister>, resolver: PathResolver) -> Self {
        Self {
            lister,
            resolver,
            state: CompletionState::NotCompleting,
        }
    }

    /// Current completion state
    pub fn state(&self) -> &CompletionState {
        &self.state
    }

    /// Feed a buffer snapshot to the state machine
    pub fn transition(&mut self, buffer: &str) {
        let was_completing = self.state.is_completing();
        self.state = std::mem::take(&mut self.state).next(buffer);

        match (was_completing, self.state.base()) {
            (false, Some(base)) => debug!("Entering completion mode, base: {:?}", base),
            (true, None) => debug!("Leaving completion mode"),
            _ => {}
        }
    }

    /// Compute the replacement for the buffer, if any
    ///
    /// # Arguments
    /// * `buffer` - Same snapshot just passed to `transition`
    ///
    /// # Returns
    /// * `None` - Not in completion mode
    /// * `Some(path)` - Next matching subdirectory with a trailing separator,
    ///   or `buffer` without trigger characters when nothing matches
    pub fn complete(&mut self, buffer: &str) -> Option<String> {
        let CompletionState::Completing { base, previous } = &mut self.state else {
            return None;
        };

        let expanded = self.resolver.expand_completion_base(base);
        let (directory, fragment) = paths::split(&expanded);
        let candidates = candidates(self.lister.as_ref(), &directory, &fragment);

        if candidates.is_empty() {
            return Some(paths::strip_trigger(buffer));
        }

        let selected = select_next(&candidates, previous.as_deref()).to_string();
        debug!(
            "Completing {:?} with {:?} ({} candidates)",
            fragment,
            selected,
            candidates.len()
        );

        let replacement = format!("{}{}", paths::join(&directory, &selected), MAIN_SEPARATOR);
        *previous = Some(selected);
        Some(replacement)
    }
}

/// Sorted subdirectories of `directory` whose names start with `fragment`,
/// ignoring case
///
/// A directory that cannot be listed yields no candidates.
fn candidates(lister: &dyn PathLister, directory: &str, fragment: &str) -> Vec<String> {
    let listing_dir = if directory.is_empty() { "." } else { directory };

    let subdirectories = match lister.list_subdirectories(Path::new(listing_dir)) {
        Ok(names) => names,
        Err(e) => {
            debug!("No completion candidates: {}", e);
            return Vec::new();
        }
    };

    let prefix = fragment.to_lowercase();
    let mut matches: Vec<String> = subdirectories
        .into_iter()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .collect();

    // Stable, case-sensitive ordering so cycling is deterministic
    matches.sort();
    matches
}

/// Candidate following `previous`, wrapping after the last one
///
/// Falls back to the first candidate when `previous` is unset or has
/// disappeared from the listing. `candidates` must not be empty.
fn select_next<'a>(candidates: &'a [String], previous: Option<&str>) -> &'a str {
    let next_index = previous
        .and_then(|prev| candidates.iter().position(|c| c == prev))
        .map(|idx| (idx + 1) % candidates.len())
        .unwrap_or(0);

    &candidates[next_index]
}
