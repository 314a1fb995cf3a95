//! Low-order solar and lunar ephemeris.
//!
//! This crate provides:
//! - Solar mean anomaly, equation of centre and geocentric coordinates
//! - A truncated lunar series (longitude, latitude, distance)
//! - Sun and Moon azimuth/altitude for a ground observer
//! - Lunar illumination (fraction, phase, bright-limb angle)
//!
//! All inputs are days since J2000.0 or an [`almanac_time::Instant`]; all
//! angles are radians. The models are low-order and make no attempt at
//! arcsecond accuracy.

pub mod illumination;
pub mod moon;
pub mod sun;

pub use illumination::{MoonIllumination, moon_illumination};
pub use moon::{MoonCoords, MoonPosition, moon_coords, moon_position};
pub use sun::{
    PERIHELION_DEG, SUN_DISTANCE_KM, SunCoords, ecliptic_longitude, equation_of_center,
    solar_mean_anomaly, sun_coords, sun_position,
};
