//! Reusable text input state with cursor management
//!
//! The cursor counts characters, not bytes, so Cyrillic input edits cleanly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line text input state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    /// Current input text
    pub input: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at the end
    pub fn with_value(value: &str) -> Self {
        let mut state = Self::new();
        state.set(value);
        state
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Byte offset of the character at `char_idx`
    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_at(&self, char_idx: usize) -> Option<char> {
        self.input.chars().nth(char_idx)
    }

    /// Insert a string at cursor position
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.input.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Delete from cursor to start of line (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.drain(..at);
        self.cursor = 0;
    }

    /// Delete from cursor to end of line (Ctrl+K)
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.truncate(at);
    }

    /// Move cursor to previous word boundary (Alt+B)
    pub fn move_word_left(&mut self) {
        while self.cursor > 0 && self.char_at(self.cursor - 1) == Some(' ') {
            self.cursor -= 1;
        }
        while self.cursor > 0 && self.char_at(self.cursor - 1) != Some(' ') {
            self.cursor -= 1;
        }
    }

    /// Move cursor to next word boundary (Alt+F)
    pub fn move_word_right(&mut self) {
        let len = self.char_len();
        while self.cursor < len && self.char_at(self.cursor) != Some(' ') {
            self.cursor += 1;
        }
        while self.cursor < len && self.char_at(self.cursor) == Some(' ') {
            self.cursor += 1;
        }
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word(&mut self) {
        let end = self.byte_index(self.cursor);
        self.move_word_left();
        let start = self.byte_index(self.cursor);
        self.input.drain(start..end);
    }

    /// Render the text with the cursor, scrolled so the cursor stays visible.
    /// The placeholder is shown while the input is empty.
    pub fn render_with_placeholder(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        show_cursor: bool,
        placeholder: &str,
        placeholder_style: Style,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let before_cursor = &self.input[..self.byte_index(self.cursor)];
        let cursor_col = before_cursor.width() as u16;
        let scroll = cursor_col.saturating_sub(area.width.saturating_sub(1));

        if self.input.is_empty() {
            Paragraph::new(placeholder)
                .style(placeholder_style)
                .render(area, buf);
        } else {
            Paragraph::new(self.input.as_str())
                .style(style)
                .scroll((0, scroll))
                .render(area, buf);
        }

        if show_cursor {
            let cursor_x = area.x + cursor_col - scroll;
            buf[(cursor_x, area.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}

impl std::fmt::Display for TextInputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}
