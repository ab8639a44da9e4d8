use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use tracing::debug;

use crate::error::Result;
use crate::paths::PathResolver;

use super::completion::{CompletionEngine, PathLister};
use super::render::PathPrompt;
use super::session::{PromptSession, SessionEvent};

/// Terminal host for the path prompt
pub struct PromptEngine {
    /// Caption and status rendering
    prompt: PathPrompt,

    /// Directory listing backend handed to each session's completion engine
    lister: Arc<dyn PathLister>,

    /// Home expansion for completion
    resolver: PathResolver,
}

/// Restores cooked mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl PromptEngine {
    /// Create a new prompt engine
    ///
    /// # Arguments
    /// * `prompt` - Prompt rendering settings
    /// * `lister` - Directory listing backend for completion
    /// * `resolver` - Home directory expansion
    pub fn new(prompt: PathPrompt, lister: Arc<dyn PathLister>, resolver: PathResolver) -> Self {
        Self {
            prompt,
            lister,
            resolver,
        }
    }

    /// Show the prompt until a path is accepted or the user cancels
    ///
    /// `on_submit` receives the raw buffer. If it fails, the error is shown as
    /// a status line and the prompt stays open with the same text.
    ///
    /// # Returns
    /// * `Ok(Some(path))` - `on_submit` accepted the input
    /// * `Ok(None)` - User cancelled
    pub fn run<F>(&self, initial: &str, mut on_submit: F) -> Result<Option<PathBuf>>
    where
        F: FnMut(&str) -> Result<PathBuf>,
    {
        if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
            return self.run_fallback(&mut on_submit);
        }

        let mut session = PromptSession::new(initial, self.new_completion_engine());
        let mut stderr = io::stderr();
        let _guard = RawModeGuard::acquire()?;

        loop {
            self.draw(&mut stderr, &session)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };

            match session.handle_key(key) {
                SessionEvent::Continue => {}
                SessionEvent::Cancel => {
                    debug!("Prompt cancelled");
                    write!(stderr, "\r\n")?;
                    return Ok(None);
                }
                SessionEvent::Submit(raw) => match on_submit(&raw) {
                    Ok(path) => {
                        write!(stderr, "\r\n")?;
                        return Ok(Some(path));
                    }
                    Err(e) => {
                        debug!("Submit rejected: {}", e);
                        let status = self.prompt.render_error(&e.to_string());
                        write!(stderr, "\r\n{status}\r\n")?;
                    }
                },
            }
        }
    }

    /// Non-interactive input: submit one line read from stdin
    fn run_fallback<F>(&self, on_submit: &mut F) -> Result<Option<PathBuf>>
    where
        F: FnMut(&str) -> Result<PathBuf>,
    {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        on_submit(line.trim_end_matches(['\n', '\r'])).map(Some)
    }

    fn new_completion_engine(&self) -> CompletionEngine {
        CompletionEngine::new(self.lister.clone(), self.resolver.clone())
    }

    fn draw<W: Write>(&self, out: &mut W, session: &PromptSession) -> Result<()> {
        let (line, column) = self.prompt.render_line(session.buffer());
        queue!(
            out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(line),
            MoveToColumn(column)
        )?;
        out.flush()?;
        Ok(())
    }
}
