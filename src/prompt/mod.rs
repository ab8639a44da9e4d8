//! Interactive path prompt
//!
//! This module provides the single-line prompt the user types a path into:
//! - Line editing on a raw-mode terminal with crossterm
//! - Directory completion cycled by repeated Tab presses
//! - Status messages for rejected submissions
//! - Plain stdin fallback when not attached to a terminal

pub mod completion;
mod engine;
mod line_buffer;
mod render;
mod session;

pub use engine::PromptEngine;
pub use line_buffer::LineBuffer;
pub use render::PathPrompt;
pub use session::{PromptSession, SessionEvent};

#[cfg(test)]
mod tests;
