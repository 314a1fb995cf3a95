//! Low-order solar ephemeris and the Sun's apparent position.
//!
//! Mean anomaly plus a three-term equation of centre gives the geocentric
//! ecliptic longitude; the Sun is taken to lie exactly on the ecliptic.
//! Good to roughly 0.01° over a few centuries around J2000.

use std::f64::consts::PI;

use almanac_frames::{
    DEG_TO_RAD, EquatorialCoords, GeoLocation, HorizontalCoords, declination,
    equatorial_to_horizontal, right_ascension,
};
use almanac_time::{Instant, local_sidereal_time_rad};

/// Ecliptic longitude of perihelion, degrees.
pub const PERIHELION_DEG: f64 = 102.9372;

/// Mean Earth–Sun distance in km, as used for lunar phase geometry.
pub const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Geocentric solar coordinates at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoords {
    /// Mean anomaly M, radians (unwrapped).
    pub mean_anomaly_rad: f64,
    /// Ecliptic longitude L, radians (unwrapped).
    pub ecliptic_longitude_rad: f64,
    /// Right ascension, radians.
    pub ra_rad: f64,
    /// Declination, radians.
    pub dec_rad: f64,
}

impl SunCoords {
    /// Equatorial part of the coordinates.
    pub fn equatorial(&self) -> EquatorialCoords {
        EquatorialCoords {
            ra_rad: self.ra_rad,
            dec_rad: self.dec_rad,
        }
    }
}

/// Solar mean anomaly M in radians, `d` days after J2000.0.
pub fn solar_mean_anomaly(d: f64) -> f64 {
    DEG_TO_RAD * (357.5291 + 0.985_600_28 * d)
}

/// Equation of centre C in radians for mean anomaly `m`.
pub fn equation_of_center(m: f64) -> f64 {
    DEG_TO_RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin())
}

/// Geocentric ecliptic longitude of the Sun for mean anomaly `m`.
///
/// `L = M + C + ϖ + π`: heliocentric longitude of the Earth, turned around.
pub fn ecliptic_longitude(m: f64) -> f64 {
    let c = equation_of_center(m);
    let perihelion = DEG_TO_RAD * PERIHELION_DEG;
    m + c + perihelion + PI
}

/// Solar coordinates `d` days after J2000.0.
pub fn sun_coords(d: f64) -> SunCoords {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);
    SunCoords {
        mean_anomaly_rad: m,
        ecliptic_longitude_rad: l,
        ra_rad: right_ascension(l, 0.0),
        dec_rad: declination(l, 0.0),
    }
}

/// Azimuth and altitude of the Sun's centre, without refraction.
pub fn sun_position(instant: Instant, location: &GeoLocation) -> HorizontalCoords {
    let d = instant.days_since_j2000();
    let lst = local_sidereal_time_rad(d, location.longitude_west_rad());
    let (coords, _) =
        equatorial_to_horizontal(&sun_coords(d).equatorial(), location.latitude_rad(), lst);
    coords
}
