//! # InputBox Component
//!
//! Single-line text field used for the booking name.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Report Enter as `Submit` without clearing, so a rejected form stays filled
//! - Scroll horizontally when the text is wider than the field
//!
//! ## State Management
//!
//! The buffer is internal state. `label` and `focused` are props set by the
//! owning form before each render.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary, visible_text};

/// Left/right border plus one column of padding on each side.
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to the first text column.
const TEXT_OFFSET: u16 = 2;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed Enter
    Submit,
    /// Text content changed
    ContentChanged,
    /// Cursor moved without changing the text
    CursorMoved,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Border title (Prop)
    pub label: String,
    /// Whether the field has keyboard focus (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl InputBox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            label: label.into(),
            focused: false,
            cursor: CursorState::new(),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    fn insert_str(&mut self, text: &str) -> Option<InputEvent> {
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
        Some(InputEvent::ContentChanged)
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        self.cursor.update_scroll(&self.buffer, width);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label.as_str());

        let text = visible_text(&self.buffer, self.cursor.scroll, width);
        let input = Paragraph::new(format!(" {text}")).block(block);
        frame.render_widget(input, area);

        if self.focused {
            let column = self.cursor.column(&self.buffer) - self.cursor.scroll;
            frame.set_cursor_position((area.x + TEXT_OFFSET + column as u16, area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks become spaces
                let flattened: String = text
                    .chars()
                    .filter(|c| *c != '\r')
                    .map(|c| if c == '\n' { ' ' } else { c })
                    .filter(|c| !c.is_control())
                    .collect();
                self.insert_str(&flattened)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => self
                .cursor
                .move_left(&self.buffer)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::CursorRight => self
                .cursor
                .move_right(&self.buffer)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::CursorHome => self.cursor.move_home().then_some(InputEvent::CursorMoved),
            TuiEvent::CursorEnd => self
                .cursor
                .move_end(&self.buffer)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
