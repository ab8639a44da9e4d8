//! Two-state machine deciding when completion mode is active
//!
//! ```text
//! NotCompleting --(buffer ends with trigger)--> Completing
//! Completing    --(buffer ends with trigger)--> Completing (unchanged)
//! Completing    --(any other buffer)---------> NotCompleting
//! ```
//!
//! The completion base and the previous completion live inside the
//! `Completing` variant, so they cannot outlive completion mode.

use crate::paths::{ends_with_trigger, strip_trigger};

/// Completion mode of one prompt session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CompletionState {
    /// Initial state; `complete` returns nothing here
    #[default]
    NotCompleting,

    /// Trigger was pressed; cycling through candidates for `base`
    Completing {
        /// Buffer content frozen at entry, trigger stripped
        base: String,
        /// Subdirectory name offered last, if any
        previous: Option<String>,
    },
}

impl CompletionState {
    /// Perform state transition for a new buffer snapshot
    ///
    /// Staying in `Completing` while the buffer still ends with the trigger is
    /// what lets repeated trigger presses advance the cycle instead of
    /// re-capturing the base.
    pub fn next(self, buffer: &str) -> Self {
        use CompletionState::*;

        match (self, ends_with_trigger(buffer)) {
            (NotCompleting, true) => Completing {
                base: strip_trigger(buffer),
                previous: None,
            },
            (NotCompleting, false) => NotCompleting,
            (Completing { .. }, false) => NotCompleting,
            (state @ Completing { .. }, true) => state,
        }
    }

    pub fn is_completing(&self) -> bool {
        matches!(self, CompletionState::Completing { .. })
    }

    /// Base captured on entry, `None` outside completion mode
    pub fn base(&self) -> Option<&str> {
        match self {
            CompletionState::Completing { base, .. } => Some(base),
            CompletionState::NotCompleting => None,
        }
    }

    /// Previously offered candidate, `None` outside completion mode
    pub fn previous(&self) -> Option<&str> {
        match self {
            CompletionState::Completing { previous, .. } => previous.as_deref(),
            CompletionState::NotCompleting => None,
        }
    }
}
