//! # BookingForm Component
//!
//! The add-booking screen: a name field, a read-only date range field that
//! opens the picker, an inline error line and a Save button.
//!
//! The form owns only presentation state (focus, the name field's text
//! buffer). The draft it edits lives in `App`; every change to the name is
//! reported upward as `FormEvent::TitleChanged` so the core stays the single
//! source of truth for what gets saved.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::dates;
use crate::core::draft::Draft;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_box::{InputBox, InputEvent};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    DateRange,
    Save,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::DateRange,
            FormField::DateRange => FormField::Save,
            FormField::Save => FormField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Save,
            FormField::DateRange => FormField::Title,
            FormField::Save => FormField::DateRange,
        }
    }
}

/// Events emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    TitleChanged(String),
    OpenPicker,
    Save,
    Back,
}

/// Persistent state for the add-booking form.
pub struct BookingFormState {
    pub title: InputBox,
    pub focus: FormField,
}

impl Default for BookingFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFormState {
    pub fn new() -> Self {
        Self {
            title: InputBox::new("Name"),
            focus: FormField::Title,
        }
    }

    /// Back to an empty name field with focus on it.
    pub fn reset(&mut self) {
        self.title.clear();
        self.focus = FormField::Title;
    }
}

impl EventHandler for BookingFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Escape => return Some(FormEvent::Back),
            TuiEvent::Save => return Some(FormEvent::Save),
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            FormField::Title => match self.title.handle_event(event)? {
                InputEvent::ContentChanged => {
                    Some(FormEvent::TitleChanged(self.title.buffer.clone()))
                }
                InputEvent::Submit => {
                    self.focus = FormField::DateRange;
                    None
                }
                InputEvent::CursorMoved => None,
            },
            FormField::DateRange => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(FormEvent::OpenPicker),
                _ => None,
            },
            FormField::Save => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(FormEvent::Save),
                _ => None,
            },
        }
    }
}

/// Transient render wrapper for the add-booking form.
pub struct BookingForm<'a> {
    state: &'a mut BookingFormState,
    draft: &'a Draft,
    error: Option<&'a str>,
    date_format: &'a str,
}

impl<'a> BookingForm<'a> {
    pub fn new(
        state: &'a mut BookingFormState,
        draft: &'a Draft,
        error: Option<&'a str>,
        date_format: &'a str,
    ) -> Self {
        Self {
            state,
            draft,
            error,
            date_format,
        }
    }

    fn focus_style(&self, field: FormField) -> Style {
        if self.state.focus == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Component for BookingForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [_, title_area, range_area, error_area, save_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(area.inner(Margin::new(2, 0)));

        self.state.title.focused = self.state.focus == FormField::Title;
        self.state.title.render(frame, title_area);

        let range_text = dates::format_partial_range(&self.draft.range, self.date_format);
        let range_block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.focus_style(FormField::DateRange))
            .title("Date Range")
            .title_bottom(
                Line::from(Span::styled(" Enter Pick dates ", self.focus_style(FormField::DateRange)))
                    .right_aligned(),
            );
        frame.render_widget(
            Paragraph::new(format!(" {range_text}")).block(range_block),
            range_area,
        );

        if let Some(error) = self.error {
            let error_line = Paragraph::new(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(error_line, error_area);
        }

        let save_style = if self.state.focus == FormField::Save {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let save = Paragraph::new(Line::from(Span::styled("[ Save ]", save_style)).centered());
        frame.render_widget(save, save_area);
    }
}
