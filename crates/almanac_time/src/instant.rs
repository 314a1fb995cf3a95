//! Absolute UTC instants with millisecond resolution.
//!
//! [`Instant`] is the only time representation crossing crate boundaries.
//! It stores whole milliseconds since the Unix epoch; Julian Dates are
//! derived on demand and converted back by truncating toward zero.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::TimeError;
use crate::julian::{
    MILLIS_PER_DAY, jd_to_j2000_days, jd_to_unix_millis, unix_millis_to_jd,
};

/// An absolute point in time, UTC, in whole milliseconds since 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    unix_millis: i64,
}

impl Instant {
    /// 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self { unix_millis: 0 };

    /// Create an instant from milliseconds since the Unix epoch.
    pub const fn from_unix_millis(unix_millis: i64) -> Self {
        Self { unix_millis }
    }

    /// Milliseconds since the Unix epoch.
    pub const fn unix_millis(self) -> i64 {
        self.unix_millis
    }

    /// Create an instant from UTC calendar fields.
    ///
    /// `second` may carry a fraction; it is rounded to the nearest millisecond.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidCalendar {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(invalid());
        }
        let minute_start = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .ok_or_else(invalid)?;
        let millis = minute_start.and_utc().timestamp_millis() + (second * 1000.0).round() as i64;
        Ok(Self::from_unix_millis(millis))
    }

    /// Instant at a Julian Date, truncated toward zero to whole milliseconds.
    ///
    /// Returns `None` for a non-finite Julian Date, which is how an undefined
    /// event time (e.g. `acos` of an out-of-range argument) surfaces.
    pub fn from_jd(jd: f64) -> Option<Self> {
        let millis = jd_to_unix_millis(jd);
        if !millis.is_finite() {
            return None;
        }
        Some(Self::from_unix_millis(millis as i64))
    }

    /// Julian Date (UTC) of this instant.
    pub fn to_jd(self) -> f64 {
        unix_millis_to_jd(self.unix_millis as f64)
    }

    /// Days elapsed since J2000.0.
    pub fn days_since_j2000(self) -> f64 {
        jd_to_j2000_days(self.to_jd())
    }

    /// Shift by a (possibly fractional) number of hours, truncating to whole
    /// milliseconds.
    pub fn add_hours(self, hours: f64) -> Self {
        let millis = self.unix_millis as f64 + hours * MILLIS_PER_DAY / 24.0;
        Self::from_unix_millis(millis as i64)
    }

    /// 00:00:00 UTC on this instant's UTC calendar day.
    pub fn start_of_utc_day(self) -> Self {
        let day_ms = MILLIS_PER_DAY as i64;
        Self::from_unix_millis(self.unix_millis.div_euclid(day_ms) * day_ms)
    }

    /// Calendar representation. Fails only far outside the years ±262 000.
    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        DateTime::from_timestamp_millis(self.unix_millis)
            .ok_or(TimeError::OutOfRange(self.unix_millis))
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_unix_millis(dt.timestamp_millis())
    }
}

impl TryFrom<Instant> for DateTime<Utc> {
    type Error = TimeError;

    fn try_from(instant: Instant) -> Result<Self, Self::Error> {
        instant.to_datetime()
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(dt) if self.unix_millis.rem_euclid(1000) == 0 => {
                write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ"))
            }
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Err(_) => write!(f, "{}ms", self.unix_millis),
        }
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    /// Accepts RFC 3339 (`2013-03-05T04:34:56Z`, any offset), a zone-less
    /// `YYYY-MM-DDThh:mm:ss[.fff]` read as UTC, or a bare `YYYY-MM-DD`
    /// meaning UTC midnight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc).into());
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(naive.and_utc().into());
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => date
                .and_hms_opt(0, 0, 0)
                .map(|midnight| midnight.and_utc().into())
                .ok_or_else(|| TimeError::Parse {
                    input: s.to_string(),
                    reason: "date has no midnight".to_string(),
                }),
            Err(e) => Err(TimeError::Parse {
                input: s.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
