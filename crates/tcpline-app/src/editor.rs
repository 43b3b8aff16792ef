//! Line editor state machine.
//!
//! [`LineEditor`] owns the edit buffer, the [`History`] and the history
//! cursor, and exposes one transition per key action. It performs no I/O:
//! submitting returns the wire form of the line for the caller to queue.
//!
//! # Cursor
//!
//! The cursor is an offset from the end of the history in
//! `0..=history.len()`. Zero means the buffer is live input; any other value
//! means the buffer shows `history.from_end(cursor)`.
//!
//! When browsing starts, the live buffer is stashed as a draft and put back
//! when the cursor returns to zero, so recalling older then newer the same
//! number of times leaves the buffer as it was. Typing while browsing ends
//! browsing: the recalled text becomes live input and the draft is dropped.

use crate::History;

/// Edit buffer, history and history cursor.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buffer: String,
    history: History,
    cursor: usize,
    draft: String,
}

impl LineEditor {
    /// Create an editor with an empty buffer and history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor seeded with existing history.
    pub fn with_history(history: History) -> Self {
        Self { history, ..Self::default() }
    }

    /// Append a printable character.
    pub fn insert(&mut self, c: char) {
        if self.cursor > 0 {
            self.cursor = 0;
            self.draft.clear();
        }
        self.buffer.push(c);
    }

    /// Remove the last character. No-op on an empty buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Step one entry back in history (arrow up). Clamped at the oldest entry.
    pub fn recall_older(&mut self) {
        if self.cursor >= self.history.len() {
            return;
        }
        if self.cursor == 0 {
            self.draft = std::mem::take(&mut self.buffer);
        }
        self.cursor = self.cursor.saturating_add(1);
        self.load_cursor_entry();
    }

    /// Step one entry forward in history (arrow down).
    ///
    /// Leaving the newest entry restores the draft. No-op on live input.
    pub fn recall_newer(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
        if self.cursor == 0 {
            self.buffer = std::mem::take(&mut self.draft);
        } else {
            self.load_cursor_entry();
        }
    }

    /// Take the buffer as a line to send.
    ///
    /// Returns the newline-terminated wire form; an empty buffer yields a bare
    /// `"\n"`. Non-empty lines are recorded in history unless they repeat the
    /// newest entry. Afterwards the buffer is empty and browsing is reset.
    pub fn submit(&mut self) -> String {
        let mut line = std::mem::take(&mut self.buffer);
        self.history.push(&line);
        self.cursor = 0;
        self.draft.clear();

        line.push('\n');
        line
    }

    /// Line currently being composed.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Submitted lines, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Offset from the end of history. Zero when not browsing.
    pub fn history_cursor(&self) -> usize {
        self.cursor
    }

    /// True while the buffer shows a history entry.
    pub fn is_browsing(&self) -> bool {
        self.cursor > 0
    }

    fn load_cursor_entry(&mut self) {
        if let Some(entry) = self.history.from_end(self.cursor) {
            entry.clone_into(&mut self.buffer);
        }
    }
}
