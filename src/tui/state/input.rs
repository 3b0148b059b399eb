// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Input state for the chat widget
//!
//! Manages the single-line input buffer, cursor position, and history
//! navigation. The cursor is a character index, so multi-byte input is
//! safe to edit anywhere in the buffer.

/// Input state for the text input area
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current input buffer
    buffer: String,
    /// Cursor position (character index)
    pub cursor: usize,
    /// History of previous submissions
    pub history: Vec<String>,
    /// Current history index (None = new input, Some(i) = browsing history)
    history_index: Option<usize>,
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

    /// Byte offset of the cursor's character index
    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.buffer.len(), |(offset, _)| offset)
    }

    /// Number of characters in the buffer
    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.buffer.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.buffer.remove(offset);
        }
    }

    /// Delete the character at the cursor (delete)
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let offset = self.byte_offset(self.cursor);
            self.buffer.remove(offset);
        }
    }

    /// Delete the word before the cursor
    pub fn delete_word(&mut self) {
        while self.cursor > 0 && self.buffer.chars().nth(self.cursor - 1) == Some(' ') {
            self.backspace();
        }
        while self.cursor > 0 && self.buffer.chars().nth(self.cursor - 1) != Some(' ') {
            self.backspace();
        }
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

    /// Submit the current input and return it.
    /// Adds to history if non-empty and different from the last entry.
    pub fn submit(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;

        if !text.trim().is_empty() && self.history.last().map(|s| s.as_str()) != Some(&text) {
            self.history.push(text.clone());
            if self.history.len() > self.max_history {
                self.history.remove(0);
            }
        }

        text
    }

    /// Navigate to the previous history entry
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        match self.history_index {
            None => {
                self.saved_buffer = Some(self.buffer.clone());
                self.history_index = Some(self.history.len() - 1);
                self.set_from_history(self.history.len() - 1);
            }
            Some(0) => {}
            Some(i) => {
                self.history_index = Some(i - 1);
                self.set_from_history(i - 1);
            }
        }
    }

    /// Navigate to the next history entry
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i >= self.history.len() - 1 => {
                self.history_index = None;
                if let Some(saved) = self.saved_buffer.take() {
                    self.buffer = saved;
                    self.cursor = self.char_count();
                }
            }
            Some(i) => {
                self.history_index = Some(i + 1);
                self.set_from_history(i + 1);
            }
        }
    }

    fn set_from_history(&mut self, index: usize) {
        self.buffer = self.history[index].clone();
        self.cursor = self.char_count();
    }

    /// Set the buffer content directly
    pub fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.char_count();
        self.history_index = None;
    }
}
