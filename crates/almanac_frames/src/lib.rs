//! Coordinate frames for the almanac engine.
//!
//! Provides the fixed-obliquity ecliptic → equatorial rotation, the
//! equatorial → horizontal transform for a ground observer, and the local
//! corrections applied to the Moon (parallactic angle, horizontal parallax,
//! atmospheric refraction).

pub mod ecliptic;
pub mod error;
pub mod horizontal;
pub mod location;

pub use ecliptic::{
    EquatorialCoords, OBLIQUITY_DEG, OBLIQUITY_RAD, declination, ecliptic_to_equatorial,
    right_ascension,
};
pub use error::LocationError;
pub use horizontal::{
    EARTH_RADIUS_KM, HorizontalCoords, altitude, astro_refraction, azimuth,
    equatorial_to_horizontal, horizontal_parallax, hour_angle, parallactic_angle,
};
pub use location::GeoLocation;

/// Degrees to radians, `π / 180`.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
