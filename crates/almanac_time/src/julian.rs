//! Julian Date arithmetic on Unix milliseconds.
//!
//! The ephemeris formulas are written against days since J2000.0, so every
//! instant passes through here on its way into the trigonometry. The
//! conversions are plain `f64` affine maps with no rounding, keeping
//! sub-millisecond resolution in the fractional day.

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of 1970-01-01T12:00:00Z.
///
/// The Unix epoch itself falls on JD 2440587.5; the half-day shift is applied
/// in [`unix_millis_to_jd`].
pub const J1970: f64 = 2_440_588.0;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date from (possibly fractional) Unix milliseconds.
pub fn unix_millis_to_jd(millis: f64) -> f64 {
    millis / MILLIS_PER_DAY - 0.5 + J1970
}

/// Unix milliseconds from a Julian Date. Not rounded.
pub fn jd_to_unix_millis(jd: f64) -> f64 {
    (jd + 0.5 - J1970) * MILLIS_PER_DAY
}

/// Days elapsed since J2000.0 for a Julian Date.
pub fn jd_to_j2000_days(jd: f64) -> f64 {
    jd - J2000_JD
}
