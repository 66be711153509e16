//! Cursor position tracking for the single-line InputBox.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll.
//! All navigation methods accept `buffer: &str` explicitly. The text itself
//! is owned by `InputBox`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Display columns hidden to the left of the field
    pub scroll: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0, scroll: 0 }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll = 0;
    }

    pub fn move_left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    pub fn move_right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.pos != 0;
        self.pos = 0;
        moved
    }

    pub fn move_end(&mut self, buffer: &str) -> bool {
        let moved = self.pos != buffer.len();
        self.pos = buffer.len();
        moved
    }

    /// Display column of the cursor, counted from the start of the buffer.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Shift the scroll so the cursor stays inside a field `width` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, width: usize) {
        if width == 0 {
            self.scroll = 0;
            return;
        }
        let column = self.column(buffer);
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll + width {
            self.scroll = column + 1 - width;
        }
    }
}

/// The slice of `buffer` visible in a field `width` columns wide after
/// hiding `scroll` columns on the left.
pub(super) fn visible_text(buffer: &str, scroll: usize, width: usize) -> String {
    let mut skipped = 0;
    let mut used = 0;
    let mut visible = String::new();
    for c in buffer.chars() {
        let w = c.width().unwrap_or(0);
        if skipped < scroll {
            skipped += w;
            continue;
        }
        if used + w > width {
            break;
        }
        used += w;
        visible.push(c);
    }
    visible
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
