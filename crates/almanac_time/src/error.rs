//! Error types for instant construction and parsing.

use thiserror::Error;

/// Errors from building or parsing an [`Instant`](crate::Instant).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Text did not match any accepted date/time layout.
    #[error("cannot parse `{input}` as a UTC date/time: {reason}")]
    Parse { input: String, reason: String },
    /// Calendar fields do not name a real UTC date/time.
    #[error("invalid calendar date/time {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second}")]
    InvalidCalendar {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    },
    /// Instant cannot be represented as a calendar date.
    #[error("instant {0} ms is outside the representable calendar range")]
    OutOfRange(i64),
}
