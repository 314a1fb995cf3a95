//! Time handling for the almanac engine.
//!
//! This crate provides:
//! - [`Instant`], the absolute UTC time value used by every service
//! - Julian Date ↔ Unix millisecond conversions and days since J2000.0
//! - Low-order Greenwich/local sidereal time
//!
//! Everything is UTC. There is no leap-second or UT1 handling; the ephemeris
//! models downstream are far coarser than those corrections.

pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    J1970, J2000_JD, MILLIS_PER_DAY, jd_to_j2000_days, jd_to_unix_millis, unix_millis_to_jd,
};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_to_j2000_days() {
        let t = Instant::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(t.to_jd(), J2000_JD);
        assert_eq!(t.days_since_j2000(), 0.0);
    }

    #[test]
    fn jd_roundtrip_through_instant() {
        let t = Instant::from_utc(2013, 3, 5, 10, 10, 57.0).unwrap();
        let back = Instant::from_jd(t.to_jd()).unwrap();
        // Truncation may cost one millisecond.
        assert!((back.unix_millis() - t.unix_millis()).abs() <= 1);
    }
}
