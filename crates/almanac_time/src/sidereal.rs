//! Greenwich and local sidereal time for the low-order almanac model.
//!
//! A linear approximation in days since J2000.0:
//!
//!   θ₀ = 280.16° + 360.9856235° × d
//!
//! accurate to a few arcseconds over a century either side of J2000,
//! which is well below the error budget of the solar and lunar series.
//!
//! The angles are left unwrapped; downstream code only takes `sin`/`cos`
//! of them.

/// Degrees to radians.
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Sidereal angle at J2000.0, degrees.
const THETA0_DEG: f64 = 280.16;

/// Sidereal rotation per mean solar day, degrees.
const SIDEREAL_DEG_PER_DAY: f64 = 360.985_623_5;

/// Greenwich sidereal time in radians, `d` days after J2000.0.
///
/// Not reduced to [0, 2π).
pub fn gmst_rad(days_since_j2000: f64) -> f64 {
    DEG_TO_RAD * (THETA0_DEG + SIDEREAL_DEG_PER_DAY * days_since_j2000)
}

/// Local sidereal time in radians for an observer at `longitude_west_rad`.
///
/// Longitude here is west-positive (`lw = −λ_east`), the sign convention used
/// by the hour-angle formulas downstream.
pub fn local_sidereal_time_rad(days_since_j2000: f64, longitude_west_rad: f64) -> f64 {
    gmst_rad(days_since_j2000) - longitude_west_rad
}
