//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::booking::{Booking, DateRange};
use crate::core::state::App;

/// 01/15/2025 - 01/20/2025 at UTC midnight.
pub const JAN_15_TO_20: DateRange = DateRange {
    start: Some(1_736_899_200_000),
    end: Some(1_737_331_200_000),
};

/// Creates a test App with the default date format.
pub fn test_app() -> App {
    App::default()
}

/// The booking used throughout the store scenarios.
pub fn trip() -> Booking {
    Booking::new("Trip", DateRange::new(1_700_000_000_000, 1_700_500_000_000))
}

/// A booking with the given title over `JAN_15_TO_20`.
pub fn booking(title: &str) -> Booking {
    Booking::new(title, JAN_15_TO_20)
}
