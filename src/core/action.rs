//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses `a` on the list? That's `Action::OpenAddBooking`.
//! User confirms the date picker? That's `Action::SetDraftRange(range)`.
//!
//! The `update()` function takes the current state and an action,
//! applies it, and returns an `Effect` telling the adapter what else to do.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::booking::{BookingId, DateRange};
use crate::core::draft::Draft;
use crate::core::state::{App, Screen};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenAddBooking,
    /// Leave the form, or leave the app when already on the list.
    NavigateBack,
    SetDraftTitle(String),
    SetDraftRange(DateRange),
    SaveDraft,
    ToggleBooking(BookingId),
    DeleteBooking(BookingId),
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// The add-booking form was left; local form state should be reset.
    FormClosed,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::OpenAddBooking => {
            app.draft = Draft::default();
            app.form_error = None;
            app.screen = Screen::AddBooking;
            Effect::None
        }
        Action::NavigateBack => match app.screen {
            Screen::BookingList => Effect::Quit,
            Screen::AddBooking => {
                close_form(app);
                Effect::FormClosed
            }
        },
        Action::SetDraftTitle(title) => {
            app.draft.title = title;
            Effect::None
        }
        Action::SetDraftRange(range) => {
            app.draft.range = range;
            Effect::None
        }
        Action::SaveDraft => match app.draft.validate() {
            Ok(booking) => {
                app.status_message = format!("Added \"{}\"", booking.title);
                app.store.add(booking);
                close_form(app);
                Effect::FormClosed
            }
            Err(err) => {
                info!("Rejected booking draft: {}", err);
                app.form_error = Some(err.user_message().to_string());
                Effect::None
            }
        },
        Action::ToggleBooking(id) => {
            let snapshot = app.store.toggle_id(id);
            if let Some(entry) = snapshot.get(id) {
                let state = if entry.booking.is_completed {
                    "complete"
                } else {
                    "not complete"
                };
                app.status_message = format!("Marked \"{}\" {}", entry.booking.title, state);
            }
            Effect::None
        }
        Action::DeleteBooking(id) => {
            let title = app.store.snapshot().get(id).map(|e| e.booking.title.clone());
            app.store.remove_id(id);
            if let Some(title) = title {
                app.status_message = format!("Deleted \"{}\"", title);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn close_form(app: &mut App) {
    app.draft = Draft::default();
    app.form_error = None;
    app.screen = Screen::BookingList;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draft::INCOMPLETE_SUBMISSION_MESSAGE;
    use crate::test_support::{test_app, trip};

    fn fill_trip_draft(app: &mut App) {
        update(app, Action::OpenAddBooking);
        update(app, Action::SetDraftTitle("Trip".to_string()));
        update(
            app,
            Action::SetDraftRange(DateRange::new(1_700_000_000_000, 1_700_500_000_000)),
        );
    }

    #[test]
    fn test_open_add_booking_switches_screen() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::OpenAddBooking), Effect::None);
        assert_eq!(app.screen, Screen::AddBooking);
    }

    #[test]
    fn test_save_valid_draft_adds_and_returns_to_list() {
        let mut app = test_app();
        fill_trip_draft(&mut app);

        assert_eq!(update(&mut app, Action::SaveDraft), Effect::FormClosed);
        assert_eq!(app.screen, Screen::BookingList);
        assert_eq!(app.draft, Draft::default());

        let snapshot = app.store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.entries()[0].booking, trip());
        assert_eq!(app.status_message, "Added \"Trip\"");
    }

    #[test]
    fn test_save_with_empty_title_is_rejected() {
        let mut app = test_app();
        fill_trip_draft(&mut app);
        update(&mut app, Action::SetDraftTitle(String::new()));

        assert_eq!(update(&mut app, Action::SaveDraft), Effect::None);
        assert!(app.store.snapshot().is_empty());
        assert_eq!(app.screen, Screen::AddBooking);
        assert_eq!(app.form_error.as_deref(), Some(INCOMPLETE_SUBMISSION_MESSAGE));
        // Form stays populated for correction
        assert!(app.draft.range.is_complete());
    }

    #[test]
    fn test_save_with_partial_range_is_rejected() {
        let mut app = test_app();
        update(&mut app, Action::OpenAddBooking);
        update(&mut app, Action::SetDraftTitle("Trip".to_string()));
        update(
            &mut app,
            Action::SetDraftRange(DateRange {
                start: Some(1),
                end: None,
            }),
        );
        update(&mut app, Action::SaveDraft);
        assert!(app.store.snapshot().is_empty());
        assert_eq!(app.draft.title, "Trip");
        assert!(app.form_error.is_some());
    }

    #[test]
    fn test_reopening_form_clears_previous_error() {
        let mut app = test_app();
        update(&mut app, Action::OpenAddBooking);
        update(&mut app, Action::SaveDraft);
        assert!(app.form_error.is_some());

        assert_eq!(update(&mut app, Action::NavigateBack), Effect::FormClosed);
        update(&mut app, Action::OpenAddBooking);
        assert!(app.form_error.is_none());
    }

    #[test]
    fn test_back_from_form_discards_draft() {
        let mut app = test_app();
        fill_trip_draft(&mut app);
        update(&mut app, Action::NavigateBack);
        assert_eq!(app.screen, Screen::BookingList);
        assert_eq!(app.draft, Draft::default());
        assert!(app.store.snapshot().is_empty());
    }

    #[test]
    fn test_back_from_list_quits() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::NavigateBack), Effect::Quit);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_toggle_and_delete_by_id() {
        let mut app = test_app();
        fill_trip_draft(&mut app);
        update(&mut app, Action::SaveDraft);
        let id = app.store.snapshot().entries()[0].id;

        update(&mut app, Action::ToggleBooking(id));
        assert!(app.store.snapshot().entries()[0].booking.is_completed);
        assert_eq!(app.status_message, "Marked \"Trip\" complete");

        update(&mut app, Action::ToggleBooking(id));
        assert_eq!(app.status_message, "Marked \"Trip\" not complete");

        update(&mut app, Action::DeleteBooking(id));
        assert!(app.store.snapshot().is_empty());
        assert_eq!(app.status_message, "Deleted \"Trip\"");
    }

    #[test]
    fn test_delete_unknown_id_leaves_status() {
        let mut app = test_app();
        app.status_message = "unchanged".to_string();
        let id = app.store.add(trip()).entries()[0].id;
        app.store.remove_id(id);

        update(&mut app, Action::DeleteBooking(id));
        assert_eq!(app.status_message, "unchanged");
    }
}
