//! # BookingList Component
//!
//! The entry screen: every booking with its checkbox, title and date range.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookingListState` lives in `TuiState` and holds the latest snapshot
//!   received from the store subscription
//! - `BookingList` is created each frame with borrowed state
//!
//! Events carry `BookingId`s, never positions, so a toggle or delete always
//! lands on the row the user saw.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::booking::{BookingId, Entry};
use crate::core::dates;
use crate::core::store::Snapshot;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const EMPTY_MESSAGE: &str = "No booking entries available";

/// Events emitted by the booking list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Toggle(BookingId),
    Delete(BookingId),
    Add,
    Back,
}

/// Persistent state for the booking list.
pub struct BookingListState {
    pub snapshot: Snapshot,
    pub selected: usize,
    pub list_state: ListState,
    /// Require a second `d` before deleting
    pub require_confirm: bool,
    /// First `d` pressed, waiting for the second
    pub confirm_delete: bool,
}

impl BookingListState {
    pub fn new(snapshot: Snapshot, require_confirm: bool) -> Self {
        let mut state = Self {
            snapshot,
            selected: 0,
            list_state: ListState::default(),
            require_confirm,
            confirm_delete: false,
        };
        state.clamp_selection();
        state
    }

    /// Take a newer snapshot from the store, keeping the selection on the
    /// same booking when it still exists.
    pub fn set_snapshot(&mut self, snapshot: Snapshot) {
        let selected_id = self.selected_entry().map(|e| e.id);
        self.snapshot = snapshot;
        if let Some(pos) = selected_id.and_then(|id| self.snapshot.position(id)) {
            self.selected = pos;
        }
        self.confirm_delete = false;
        self.clamp_selection();
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.snapshot.entries().get(self.selected)
    }

    fn clamp_selection(&mut self) {
        if self.snapshot.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.snapshot.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    fn delete_selected(&mut self) -> Option<ListEvent> {
        let id = self.selected_entry()?.id;
        if self.require_confirm && !self.confirm_delete {
            self.confirm_delete = true;
            return None;
        }
        self.confirm_delete = false;
        Some(ListEvent::Delete(id))
    }
}

impl EventHandler for BookingListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        // Reset delete confirmation on any non-delete key
        let is_delete_key = matches!(event, TuiEvent::InputChar('d') | TuiEvent::Delete);
        if !is_delete_key {
            self.confirm_delete = false;
        }

        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(ListEvent::Back),
            TuiEvent::InputChar('a') | TuiEvent::InputChar('n') => Some(ListEvent::Add),
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                if !self.snapshot.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                if !self.snapshot.is_empty() {
                    self.selected = (self.selected + 1).min(self.snapshot.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::InputChar(' ') | TuiEvent::Submit => {
                self.selected_entry().map(|e| ListEvent::Toggle(e.id))
            }
            TuiEvent::InputChar('d') | TuiEvent::Delete => self.delete_selected(),
            _ => None,
        }
    }
}

/// Transient render wrapper for the booking list.
pub struct BookingList<'a> {
    state: &'a mut BookingListState,
    date_format: &'a str,
}

impl<'a> BookingList<'a> {
    pub fn new(state: &'a mut BookingListState, date_format: &'a str) -> Self {
        Self { state, date_format }
    }

    fn row(&self, index: usize, entry: &Entry) -> ListItem<'static> {
        let booking = &entry.booking;
        let is_selected = index == self.state.selected;

        let checkbox = if booking.is_completed { "[x]" } else { "[ ]" };
        let title_style = if is_selected && self.state.confirm_delete {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if is_selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if booking.is_completed {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        let checkbox_style = if booking.is_completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(checkbox, checkbox_style),
            Span::raw(" "),
            Span::styled(booking.title.clone(), title_style),
        ])];

        if let Some(range) = &booking.date_range {
            lines.push(Line::from(Span::styled(
                format!("    {}", dates::format_range(range, self.date_format)),
                Style::default().fg(Color::DarkGray),
            )));
        }

        ListItem::new(lines)
    }
}

impl Component for BookingList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        if self.state.confirm_delete {
            block = block.title_bottom(
                Line::from(" Press d again to confirm delete | any key Cancel ")
                    .centered()
                    .style(Style::default().fg(Color::Red)),
            );
        }

        if self.state.snapshot.is_empty() {
            let inner_height = area.height.saturating_sub(2);
            let top_padding = inner_height.saturating_sub(1) / 2;
            let mut lines = vec![Line::default(); top_padding as usize];
            lines.push(Line::from(EMPTY_MESSAGE));
            let empty = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .snapshot
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| self.row(i, entry))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
