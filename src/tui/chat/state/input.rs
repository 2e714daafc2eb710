// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input state for the chat TUI
//!
//! Manages the input buffer, cursor position, and history navigation.

/// Input state for the text input area
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (character index, not byte index)
    pub cursor: usize,
    /// History of previous inputs
    pub history: Vec<String>,
    /// Current history index (None = new input, Some(i) = browsing history)
    pub history_index: Option<usize>,
    /// Saved buffer when browsing history
    saved_buffer: Option<String>,
    /// Maximum history entries to keep
    max_history: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create a new input state
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
            saved_buffer: None,
            max_history: 100,
        }
    }

    /// Get the current input text
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of a character index
    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Delete the character at the cursor (delete)
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Delete the word before the cursor
    pub fn delete_word(&mut self) {
        let chars: Vec<char> = self.buffer.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1] == ' ' {
            start -= 1;
        }
        while start > 0 && chars[start - 1] != ' ' {
            start -= 1;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.buffer.replace_range(from..to, "");
        self.cursor = start;
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start of input
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end of input
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the input buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;
    }

    /// Submit the current input and return it
    /// Adds to history if non-empty
    pub fn submit(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;

        // Add to history if non-empty and different from last
        if !text.trim().is_empty() && self.history.last().map(|s| s.as_str()) != Some(&text) {
            self.history.push(text.clone());
            if self.history.len() > self.max_history {
                self.history.remove(0);
            }
        }

        text
    }

    /// Navigate to previous history entry
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        match self.history_index {
            None => {
                // Save current buffer and go to most recent history
                self.saved_buffer = Some(self.buffer.clone());
                let last = self.history.len() - 1;
                self.history_index = Some(last);
                self.buffer = self.history[last].clone();
                self.move_end();
            }
            Some(0) => {
                // Already at oldest entry
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                self.buffer = self.history[i - 1].clone();
                self.move_end();
            }
        }
    }

    /// Navigate to next history entry
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i + 1 >= self.history.len() => {
                // At most recent entry, restore saved buffer
                self.history_index = None;
                if let Some(saved) = self.saved_buffer.take() {
                    self.buffer = saved;
                    self.move_end();
                }
            }
            Some(i) => {
                self.history_index = Some(i + 1);
                self.buffer = self.history[i + 1].clone();
                self.move_end();
            }
        }
    }

    /// Text from `skip` characters onward that fits in `width` columns, with
    /// the cursor column relative to that slice. Keeps the cursor visible
    /// when the input is wider than the box.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let skip = self.cursor.saturating_sub(width - 1);
        let visible: String = self.buffer.chars().skip(skip).take(width).collect();
        (visible, self.cursor - skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        input.insert_str(text);
        input
    }

    #[test]
    fn test_insert_and_submit() {
        let mut input = InputState::new();
        input.insert_char('h');
        input.insert_char('i');
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor, 2);

        let text = input.submit();
        assert_eq!(text, "hi");
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
        assert_eq!(input.history, vec!["hi".to_string()]);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("héllo");
        assert_eq!(input.cursor, 5);
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "hllo");
        input.insert_char('é');
        assert_eq!(input.text(), "héllo");
        input.delete();
        assert_eq!(input.text(), "hélo");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = typed("a");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = typed("a");
        input.delete();
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_delete_word() {
        let mut input = typed("hello big world  ");
        input.delete_word();
        assert_eq!(input.text(), "hello big ");
        input.delete_word();
        assert_eq!(input.text(), "hello ");
        assert_eq!(input.cursor, 6);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = typed("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_end();
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_blank_submit_not_in_history() {
        let mut input = typed("   ");
        input.submit();
        assert!(input.history.is_empty());
    }

    #[test]
    fn test_duplicate_submit_not_repeated_in_history() {
        let mut input = typed("same");
        input.submit();
        input.insert_str("same");
        input.submit();
        assert_eq!(input.history.len(), 1);
    }

    #[test]
    fn test_history_navigation_restores_draft() {
        let mut input = InputState::new();
        for text in ["first", "second"] {
            input.insert_str(text);
            input.submit();
        }
        input.insert_str("draft");

        input.history_prev();
        assert_eq!(input.text(), "second");
        input.history_prev();
        assert_eq!(input.text(), "first");
        input.history_prev();
        assert_eq!(input.text(), "first");

        input.history_next();
        assert_eq!(input.text(), "second");
        input.history_next();
        assert_eq!(input.text(), "draft");
        assert!(input.history_index.is_none());
    }

    #[test]
    fn test_history_prev_empty_is_noop() {
        let mut input = typed("x");
        input.history_prev();
        assert_eq!(input.text(), "x");
    }

    #[test]
    fn test_visible_window_follows_cursor() {
        let input = typed("abcdefghij");
        let (visible, col) = input.visible_window(4);
        assert_eq!(visible, "hij");
        assert_eq!(col, 3);

        let mut input = typed("abcdefghij");
        input.move_home();
        let (visible, col) = input.visible_window(4);
        assert_eq!(visible, "abcd");
        assert_eq!(col, 0);
    }
}
