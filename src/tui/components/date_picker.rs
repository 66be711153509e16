//! # Date Range Picker Component
//!
//! Modal month-grid overlay that returns a start/end pair or is cancelled.
//! Opened from the add-booking form's date range field.
//!
//! Selection rules:
//! - the first pick sets the start
//! - a pick on or after the start sets the end
//! - a pick before the start, or any pick once both ends are set, starts over
//!
//! Enter confirms whatever is selected, even a lone start. The form's save
//! check is what rejects incomplete ranges.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::booking::DateRange;
use crate::core::config::WeekStart;
use crate::core::dates;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

/// Events emitted by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Confirm(DateRange),
    Dismiss,
}

/// Persistent state for the picker overlay.
pub struct DateRangePickerState {
    pub cursor: NaiveDate,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub week_start: WeekStart,
}

impl DateRangePickerState {
    /// Open on the month of the existing start, or on `today` when nothing
    /// has been picked yet.
    pub fn new(today: NaiveDate, initial: DateRange, week_start: WeekStart) -> Self {
        let start = initial.start.and_then(dates::millis_to_date);
        let end = initial.end.and_then(dates::millis_to_date);
        Self {
            cursor: start.unwrap_or(today),
            start,
            end,
            week_start,
        }
    }

    /// The current selection as epoch-millisecond bounds.
    pub fn selected_range(&self) -> DateRange {
        DateRange {
            start: self.start.map(dates::date_to_millis),
            end: self.end.map(dates::date_to_millis),
        }
    }

    pub fn pick(&mut self, date: NaiveDate) {
        match (self.start, self.end) {
            (Some(start), None) if date >= start => self.end = Some(date),
            _ => {
                self.start = Some(date);
                self.end = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    fn shift_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    fn shift_months(&mut self, forward: bool) {
        let moved = if forward {
            self.cursor.checked_add_months(Months::new(1))
        } else {
            self.cursor.checked_sub_months(Months::new(1))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    fn in_selection(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => start == date,
            _ => false,
        }
    }
}

impl EventHandler for DateRangePickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape => Some(PickerEvent::Dismiss),
            TuiEvent::Submit => Some(PickerEvent::Confirm(self.selected_range())),
            TuiEvent::CursorLeft => {
                self.shift_days(-1);
                None
            }
            TuiEvent::CursorRight => {
                self.shift_days(1);
                None
            }
            TuiEvent::CursorUp => {
                self.shift_days(-7);
                None
            }
            TuiEvent::CursorDown => {
                self.shift_days(7);
                None
            }
            TuiEvent::PageUp => {
                self.shift_months(false);
                None
            }
            TuiEvent::PageDown => {
                self.shift_months(true);
                None
            }
            TuiEvent::InputChar(' ') => {
                self.pick(self.cursor);
                None
            }
            TuiEvent::InputChar('x') => {
                self.clear();
                None
            }
            _ => None,
        }
    }
}

/// Column offset of the first day of the month in the grid.
fn leading_blanks(first: NaiveDate, week_start: WeekStart) -> u32 {
    match week_start {
        WeekStart::Sunday => first.weekday().num_days_from_sunday(),
        WeekStart::Monday => first.weekday().num_days_from_monday(),
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

fn weekday_header(week_start: WeekStart) -> String {
    let first = match week_start {
        WeekStart::Sunday => Weekday::Sun,
        WeekStart::Monday => Weekday::Mon,
    };
    let mut day = first;
    let mut names = Vec::with_capacity(7);
    for _ in 0..7 {
        let name = day.to_string();
        names.push(format!(" {} ", &name[..2]));
        day = day.succ();
    }
    names.join("")
}

/// Transient render wrapper for the picker overlay.
pub struct DateRangePicker<'a> {
    state: &'a DateRangePickerState,
    date_format: &'a str,
}

impl<'a> DateRangePicker<'a> {
    pub fn new(state: &'a DateRangePickerState, date_format: &'a str) -> Self {
        Self { state, date_format }
    }

    fn grid_lines(&self) -> Vec<Line<'static>> {
        let state = self.state;
        let Some(first) = state.cursor.with_day(1) else {
            return Vec::new();
        };
        let blanks = leading_blanks(first, state.week_start);
        let total = days_in_month(first);

        let mut lines = Vec::new();
        let mut spans: Vec<Span<'static>> = (0..blanks).map(|_| Span::raw("    ")).collect();

        for day in 1..=total {
            let Some(date) = first.with_day(day) else {
                continue;
            };
            let style = if date == state.cursor {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if Some(date) == state.start || Some(date) == state.end {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else if state.in_selection(date) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {:>2} ", day), style));

            if spans.len() == 7 {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }
        lines
    }

    fn selection_line(&self) -> Line<'static> {
        let describe = |date: Option<NaiveDate>| {
            date.map(|d| dates::format_timestamp(dates::date_to_millis(d), self.date_format))
                .unwrap_or_else(|| "--".to_string())
        };
        Line::from(vec![
            Span::styled("Start ", Style::default().fg(Color::DarkGray)),
            Span::raw(describe(self.state.start)),
            Span::styled("  End ", Style::default().fg(Color::DarkGray)),
            Span::raw(describe(self.state.end)),
        ])
    }
}

impl Component for DateRangePicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Select date range ")
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [month_area, header_area, grid_area, selection_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let month = Paragraph::new(Line::from(Span::styled(
            self.state.cursor.format("%B %Y").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(month, month_area);

        let header = Paragraph::new(Line::from(Span::styled(
            weekday_header(self.state.week_start),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(header, header_area);

        // Pad short last rows so every row centers on the same columns
        let lines: Vec<Line> = self
            .grid_lines()
            .into_iter()
            .map(|mut line| {
                let cells = line.spans.len();
                for _ in cells..7 {
                    line.spans.push(Span::raw("    "));
                }
                line
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), grid_area);

        frame.render_widget(
            Paragraph::new(self.selection_line()).alignment(Alignment::Center),
            selection_area,
        );
    }
}
