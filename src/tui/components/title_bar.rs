//! # TitleBar Component
//!
//! Top status bar: screen title, completion summary and the latest status
//! message.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(
//!     app.screen.title(),
//!     Some("1/3 completed".to_string()),
//!     &app.status_message,
//! );
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Summary and status**: `"Booking List | 1/3 completed | Added \"Trip\""`
//! 2. **Summary only**: `"Booking List | 1/3 completed"`
//! 3. **Title only**: `"Add Booking Entry"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    /// Screen title (e.g., "Booking List")
    pub title: &'a str,
    /// Completion summary, list screen only
    pub summary: Option<String>,
    /// Status message (e.g., "Deleted \"Trip\"")
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, summary: Option<String>, status_message: &'a str) -> Self {
        Self {
            title,
            summary,
            status_message,
        }
    }

    fn segments(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(summary) = &self.summary {
            parts.push(summary.clone());
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message.to_string());
        }
        parts
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for part in self.segments() {
            spans.push(Span::raw(format!(" | {part}")));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
