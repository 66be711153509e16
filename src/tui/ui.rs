use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BookingForm, BookingList, DateRangePicker, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, main_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let summary = match app.screen {
        Screen::BookingList => Some(completion_summary(tui)),
        Screen::AddBooking => None,
    };
    TitleBar::new(app.screen.title(), summary, &app.status_message).render(frame, title_area);

    match app.screen {
        Screen::BookingList => {
            BookingList::new(&mut tui.booking_list, &app.date_format).render(frame, main_area);
        }
        Screen::AddBooking => {
            BookingForm::new(
                &mut tui.form,
                &app.draft,
                app.form_error.as_deref(),
                &app.date_format,
            )
            .render(frame, main_area);
        }
    }

    draw_help_bar(frame, help_area, help_text(app, tui));

    if let Some(picker) = &tui.picker {
        DateRangePicker::new(picker, &app.date_format).render(frame, main_area);
    }
}

/// "1/3 completed" from the snapshot the list is showing.
fn completion_summary(tui: &TuiState) -> String {
    let snapshot = &tui.booking_list.snapshot;
    format!("{}/{} completed", snapshot.completed_count(), snapshot.len())
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    if tui.picker.is_some() {
        return "←↑↓→ Move  PgUp/PgDn Month  Space Pick  x Clear  Enter OK  Esc Cancel";
    }
    match app.screen {
        Screen::BookingList => "↑↓ Select  Space Toggle  d Delete  a Add  q Quit",
        Screen::AddBooking => "Tab Next field  Enter Select  Ctrl+S Save  Esc Back",
    }
}

fn draw_help_bar(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(help, area);
}
