//! One open prompt: buffer, completion engine and key handling
//!
//! Every change to the buffer is delivered to the completion engine as a full
//! snapshot. When the engine answers with a replacement, the session rewrites
//! the buffer through the same edit path; the in-flight flag makes that echo a
//! no-op so it cannot re-enter the engine and reset the cycle.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use super::completion::{CompletionEngine, CompletionState};
use super::line_buffer::LineBuffer;
use crate::paths::TRIGGER;

/// What the host should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Keep reading keys
    Continue,
    /// User confirmed; carries the raw buffer content
    Submit(String),
    /// User dismissed the prompt
    Cancel,
}

/// Prompt session state
pub struct PromptSession {
    /// Text being edited
    buffer: LineBuffer,

    /// Completion engine, lives exactly as long as the session
    engine: CompletionEngine,

    /// Set while a completion result is being written back into the buffer
    in_flight: bool,
}

impl PromptSession {
    /// Open a session with `initial` text and the cursor at its end
    pub fn new(initial: &str, engine: CompletionEngine) -> Self {
        Self {
            buffer: LineBuffer::with_text(initial),
            engine,
            in_flight: false,
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn completion_state(&self) -> &CompletionState {
        self.engine.state()
    }

    /// Replace the buffer content and notify the completion engine
    ///
    /// This is the single entry point for buffer changes, whether they come
    /// from the user or from a completion result.
    pub fn edit(&mut self, text: &str) {
        self.buffer.set(text);
        self.on_modified();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> SessionEvent {
        if key.kind == KeyEventKind::Release {
            return SessionEvent::Continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let changed = match key.code {
            KeyCode::Enter => return SessionEvent::Submit(self.buffer.as_str().to_string()),
            KeyCode::Esc => return SessionEvent::Cancel,
            KeyCode::Char('c') if ctrl => return SessionEvent::Cancel,
            KeyCode::Char('d') if ctrl && self.buffer.is_empty() => return SessionEvent::Cancel,
            KeyCode::Char('a') if ctrl => {
                self.buffer.move_home();
                false
            }
            KeyCode::Char('e') if ctrl => {
                self.buffer.move_end();
                false
            }
            KeyCode::Char('u') if ctrl => self.buffer.clear_to_start(),
            KeyCode::Char('w') if ctrl => self.buffer.delete_segment_before(),
            KeyCode::Char(_) if ctrl => false,
            KeyCode::Char(c) => {
                self.buffer.insert(c);
                true
            }
            KeyCode::Tab => {
                self.buffer.push_end(TRIGGER);
                true
            }
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Delete => self.buffer.delete(),
            KeyCode::Left => {
                self.buffer.move_left();
                false
            }
            KeyCode::Right => {
                self.buffer.move_right();
                false
            }
            KeyCode::Home => {
                self.buffer.move_home();
                false
            }
            KeyCode::End => {
                self.buffer.move_end();
                false
            }
            _ => false,
        };

        if changed {
            self.on_modified();
        }
        SessionEvent::Continue
    }

    /// Edit notification: run the engine on the current snapshot
    fn on_modified(&mut self) {
        if self.in_flight {
            trace!("Ignoring buffer rewrite from completion");
            return;
        }

        let snapshot = self.buffer.as_str().to_string();
        self.engine.transition(&snapshot);

        if let Some(replacement) = self.engine.complete(&snapshot) {
            self.in_flight = true;
            self.edit(&replacement);
            self.in_flight = false;
        }
    }
}
