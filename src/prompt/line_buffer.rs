//! Line buffer for prompt input
//!
//! The cursor is tracked in characters, not bytes, so editing never splits a
//! UTF-8 sequence.

use std::path::is_separator;

/// Single-line input buffer with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    /// Create empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create buffer holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set(text);
        buffer
    }

    /// Replace the whole content and move the cursor to the end
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_len();
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(idx, _)| idx)
    }

    /// Text left of the cursor
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Append a character at the end and move the cursor there
    pub fn push_end(&mut self, c: char) {
        self.text.push(c);
        self.cursor = self.char_len();
    }

    /// Remove the character left of the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
        true
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Delete everything left of the cursor
    pub fn clear_to_start(&mut self) -> bool {
        self.delete_range_before(0)
    }

    /// Delete the path segment left of the cursor
    ///
    /// Trailing separators are removed together with the segment, so repeated
    /// calls walk up one directory at a time: `/a/b/c` → `/a/b/` → `/a/` → `/`.
    pub fn delete_segment_before(&mut self) -> bool {
        let chars: Vec<char> = self.text.chars().take(self.cursor).collect();
        let mut start = chars.len();

        while start > 0 && is_separator(chars[start - 1]) {
            start -= 1;
        }
        while start > 0 && !is_separator(chars[start - 1]) {
            start -= 1;
        }

        self.delete_range_before(start)
    }

    fn delete_range_before(&mut self, start: usize) -> bool {
        if start >= self.cursor {
            return false;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.text.replace_range(from..to, "");
        self.cursor = start;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_text_puts_cursor_at_end() {
        let buffer = LineBuffer::with_text("/tmp/");
        assert_eq!(buffer.cursor(), 5);
        assert_eq!(buffer.before_cursor(), "/tmp/");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut buffer = LineBuffer::with_text("/tp");
        buffer.move_left();
        buffer.insert('m');
        assert_eq!(buffer.as_str(), "/tmp");
        assert_eq!(buffer.cursor(), 3);
    }

    #[test]
    fn test_push_end_moves_cursor() {
        let mut buffer = LineBuffer::with_text("/srv");
        buffer.move_home();
        buffer.push_end('\t');
        assert_eq!(buffer.as_str(), "/srv\t");
        assert_eq!(buffer.cursor(), 5);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut buffer = LineBuffer::with_text("abc");
        assert!(buffer.backspace());
        assert_eq!(buffer.as_str(), "ab");

        buffer.move_home();
        assert!(!buffer.backspace());
        assert!(buffer.delete());
        assert_eq!(buffer.as_str(), "b");

        buffer.move_end();
        assert!(!buffer.delete());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut buffer = LineBuffer::with_text("/café");
        assert!(buffer.backspace());
        assert_eq!(buffer.as_str(), "/caf");
        buffer.insert('é');
        buffer.move_left();
        buffer.move_left();
        buffer.insert('ñ');
        assert_eq!(buffer.as_str(), "/cañfé");
    }

    #[test]
    fn test_clear_to_start() {
        let mut buffer = LineBuffer::with_text("/tmp/file");
        buffer.move_left();
        buffer.move_left();
        assert!(buffer.clear_to_start());
        assert_eq!(buffer.as_str(), "le");
        assert_eq!(buffer.cursor(), 0);
        assert!(!buffer.clear_to_start());
    }

    #[test]
    fn test_delete_segment_walks_up() {
        let mut buffer = LineBuffer::with_text("/a/b/c");
        assert!(buffer.delete_segment_before());
        assert_eq!(buffer.as_str(), "/a/b/");
        assert!(buffer.delete_segment_before());
        assert_eq!(buffer.as_str(), "/a/");
        assert!(buffer.delete_segment_before());
        assert_eq!(buffer.as_str(), "/");
        assert!(buffer.delete_segment_before());
        assert_eq!(buffer.as_str(), "");
        assert!(!buffer.delete_segment_before());
    }
}
