//! Calendar helpers for booking timestamps.
//!
//! Timestamps are epoch milliseconds. Dates picked in the TUI are stored as
//! UTC midnight, and all formatting happens in UTC so a picked day always
//! renders as that same day.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Write;

use crate::core::booking::{DateRange, Timestamp};

pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

const UNKNOWN_DATE: &str = "??/??/????";

/// True if `format` is a strftime pattern chrono can render.
///
/// Parse-only specifiers (e.g. `%#z`) pass chrono's item parser but fail at
/// display time, so the pattern is trial-rendered.
pub fn is_valid_format(format: &str) -> bool {
    !format.is_empty() && render(DateTime::UNIX_EPOCH, format).is_some()
}

fn render(dt: DateTime<Utc>, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(format)).ok()?;
    Some(out)
}

/// UTC midnight of `date` in epoch milliseconds.
pub fn date_to_millis(date: NaiveDate) -> Timestamp {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// UTC calendar date of `ts`, if it is representable.
pub fn millis_to_date(ts: Timestamp) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(ts).map(|dt| dt.date_naive())
}

pub fn format_timestamp(ts: Timestamp, format: &str) -> String {
    DateTime::<Utc>::from_timestamp_millis(ts)
        .and_then(|dt| render(dt, format))
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// `"<start> - <end>"` as shown in the booking list. Unset ends render as
/// the epoch.
pub fn format_range(range: &DateRange, format: &str) -> String {
    format!(
        "{} - {}",
        format_timestamp(range.start.unwrap_or(0), format),
        format_timestamp(range.end.unwrap_or(0), format)
    )
}

/// `"<start> - <end>"` as shown in the entry form. Unset ends render empty.
pub fn format_partial_range(range: &DateRange, format: &str) -> String {
    let part = |ts: Option<Timestamp>| {
        ts.map(|ts| format_timestamp(ts, format))
            .unwrap_or_default()
    };
    format!("{} - {}", part(range.start), part(range.end))
}
