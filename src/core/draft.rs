//! The unsaved contents of the add-booking form and the check that turns
//! them into a `Booking`.

use std::fmt;

use crate::core::booking::{Booking, DateRange};

/// Shown under the form whenever a save is rejected.
pub const INCOMPLETE_SUBMISSION_MESSAGE: &str = "Please fill in all fields.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub range: DateRange,
}

/// Why a draft cannot be saved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    MissingTitle,
    MissingStart,
    MissingEnd,
}

impl SubmissionError {
    /// The message the form shows, identical for every reason.
    pub fn user_message(&self) -> &'static str {
        INCOMPLETE_SUBMISSION_MESSAGE
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::MissingTitle => write!(f, "booking title is empty"),
            SubmissionError::MissingStart => write!(f, "date range has no start"),
            SubmissionError::MissingEnd => write!(f, "date range has no end"),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl Draft {
    pub fn validate(&self) -> Result<Booking, SubmissionError> {
        if self.title.is_empty() {
            return Err(SubmissionError::MissingTitle);
        }
        if self.range.start.is_none() {
            return Err(SubmissionError::MissingStart);
        }
        if self.range.end.is_none() {
            return Err(SubmissionError::MissingEnd);
        }
        Ok(Booking::new(self.title.clone(), self.range))
    }
}
