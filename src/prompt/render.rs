//! Prompt line and status rendering

use nu_ansi_term::{Color, Style};

use super::line_buffer::LineBuffer;
use crate::paths::strip_trigger;

/// Prefix for status messages shown under the prompt
const STATUS_PREFIX: &str = "[quicknew]";

/// Caption plus buffer, as drawn on the terminal
pub struct PathPrompt {
    /// Text shown before the buffer
    caption: String,
    /// Whether to emit ANSI colors
    color: bool,
}

impl PathPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `caption` - Caption shown left of the input
    /// * `color` - Whether to emit ANSI colors
    pub fn new(caption: String, color: bool) -> Self {
        Self { caption, color }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Render the prompt line and the cursor column
    ///
    /// Trigger characters are never drawn; they only live in the buffer for
    /// the instant between the key press and the completion rewrite.
    pub fn render_line(&self, buffer: &LineBuffer) -> (String, u16) {
        let text = strip_trigger(buffer.as_str());
        let caption = if self.color {
            Style::new().bold().fg(Color::Cyan).paint(&self.caption).to_string()
        } else {
            self.caption.clone()
        };

        let visible_before_cursor = strip_trigger(buffer.before_cursor()).chars().count();
        let column = self.caption.chars().count() + 1 + visible_before_cursor;

        (
            format!("{caption} {text}"),
            u16::try_from(column).unwrap_or(u16::MAX),
        )
    }

    /// Render an error status message
    pub fn render_error(&self, message: &str) -> String {
        let line = format!("{STATUS_PREFIX} Error: {message}");
        if self.color {
            Color::Red.paint(line).to_string()
        } else {
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_line() {
        let prompt = PathPrompt::new("Filename:".to_string(), false);
        let (line, column) = prompt.render_line(&LineBuffer::with_text("/tmp/"));
        assert_eq!(line, "Filename: /tmp/");
        assert_eq!(column, 15);
    }

    #[test]
    fn test_trigger_is_hidden() {
        let prompt = PathPrompt::new("File:".to_string(), false);
        let (line, column) = prompt.render_line(&LineBuffer::with_text("/srv/ba\t"));
        assert_eq!(line, "File: /srv/ba");
        assert_eq!(column, 13);
    }

    #[test]
    fn test_cursor_column_follows_cursor() {
        let prompt = PathPrompt::new("F".to_string(), false);
        let mut buffer = LineBuffer::with_text("abc");
        buffer.move_left();
        let (_, column) = prompt.render_line(&buffer);
        assert_eq!(column, 4);
    }

    #[test]
    fn test_colored_caption_keeps_plain_column() {
        let prompt = PathPrompt::new("Filename:".to_string(), true);
        let (line, column) = prompt.render_line(&LineBuffer::with_text("x"));
        assert!(line.contains("\u{1b}["));
        assert!(line.ends_with(" x"));
        assert_eq!(column, 11);
    }

    #[test]
    fn test_render_error() {
        let prompt = PathPrompt::new("Filename:".to_string(), false);
        assert_eq!(
            prompt.render_error("Empty filename"),
            "[quicknew] Error: Empty filename"
        );
    }
}
