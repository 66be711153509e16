//! # Application State
//!
//! Core business state for the bookings app. This module contains domain
//! logic only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── store: BookingStore           // the bookings themselves
//! ├── screen: Screen                // list or add-booking form
//! ├── draft: Draft                  // unsaved form contents
//! ├── form_error: Option<String>    // inline validation message
//! ├── status_message: String        // title bar text
//! └── date_format: String           // strftime pattern for ranges
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::dates::DEFAULT_DATE_FORMAT;
use crate::core::draft::Draft;
use crate::core::store::BookingStore;

/// Which of the two screens is showing. The list is the entry point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    BookingList,
    AddBooking,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::BookingList => "Booking List",
            Screen::AddBooking => "Add Booking Entry",
        }
    }
}

pub struct App {
    pub store: BookingStore,
    pub screen: Screen,
    pub draft: Draft,
    pub form_error: Option<String>,
    pub status_message: String,
    pub date_format: String,
}

impl App {
    pub fn new(date_format: String) -> Self {
        Self {
            store: BookingStore::new(),
            screen: Screen::default(),
            draft: Draft::default(),
            form_error: None,
            status_message: String::new(),
            date_format,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.date_format.clone())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::BookingList);
        assert!(app.store.snapshot().is_empty());
        assert!(app.form_error.is_none());
        assert_eq!(app.date_format, "%m/%d/%Y");
    }

    #[test]
    fn test_from_config_uses_date_format() {
        let config = ResolvedConfig {
            date_format: "%Y-%m-%d".to_string(),
            ..Default::default()
        };
        assert_eq!(App::from_config(&config).date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::BookingList.title(), "Booking List");
        assert_eq!(Screen::AddBooking.title(), "Add Booking Entry");
    }
}
