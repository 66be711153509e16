//! # Booking Model
//!
//! The value types the store holds.
//!
//! ```text
//! Entry
//! ├── id: BookingId            // assigned by the store, never reused
//! └── booking: Booking
//!     ├── title: String        // non-empty once accepted
//!     ├── is_completed: bool   // false at creation
//!     └── date_range: Option<DateRange>
//!         ├── start: Option<Timestamp>
//!         └── end: Option<Timestamp>
//! ```
//!
//! `Booking` compares structurally. Two bookings with the same title,
//! completion flag and range are equal, whatever their ids.

use std::fmt;

/// Moment in time as milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// A start/end pair where either end may still be unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

impl DateRange {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True when both ends are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Booking {
    pub title: String,
    pub is_completed: bool,
    pub date_range: Option<DateRange>,
}

impl Booking {
    /// A fresh, not yet completed booking.
    pub fn new(title: impl Into<String>, date_range: DateRange) -> Self {
        Self {
            title: title.into(),
            is_completed: false,
            date_range: Some(date_range),
        }
    }

    /// Copy of this booking with the completion flag inverted.
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }
}

/// Stable identifier handed out by the store on insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingId(u64);

impl BookingId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element of a store snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: BookingId,
    pub booking: Booking,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_booking_is_not_completed() {
        let booking = Booking::new("Trip", DateRange::new(1, 2));
        assert!(!booking.is_completed);
        assert_eq!(booking.date_range, Some(DateRange::new(1, 2)));
    }

    #[test]
    fn test_toggled_only_flips_completion() {
        let booking = Booking::new("Trip", DateRange::new(1, 2));
        let toggled = booking.toggled();
        assert!(toggled.is_completed);
        assert_eq!(toggled.title, booking.title);
        assert_eq!(toggled.date_range, booking.date_range);
        assert_eq!(toggled.toggled(), booking);
    }

    #[test]
    fn test_structural_equality_ignores_identity() {
        let a = Booking::new("Trip", DateRange::new(1, 2));
        let b = Booking::new("Trip", DateRange::new(1, 2));
        assert_eq!(a, b);
        assert_ne!(a, Booking::new("Trip", DateRange::new(1, 3)));
    }

    #[test]
    fn test_partial_range_is_incomplete() {
        let range = DateRange {
            start: Some(5),
            end: None,
        };
        assert!(!range.is_complete());
        assert!(!DateRange::default().is_complete());
        assert!(DateRange::new(5, 6).is_complete());
    }

    #[test]
    fn test_booking_id_display() {
        assert_eq!(BookingId::new(7).to_string(), "#7");
    }
}
