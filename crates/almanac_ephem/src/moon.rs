//! Truncated lunar series and the Moon's apparent position.
//!
//! Three mean elements, each linear in days since J2000.0, and one periodic
//! term apiece for longitude, latitude and distance (the leading terms of
//! the ELP/Meeus Chapter 47 series). Errors reach a few tenths of a degree,
//! which is fine for rise/set and illumination but not for occultations.

use almanac_frames::{
    DEG_TO_RAD, EquatorialCoords, GeoLocation, HorizontalCoords, astro_refraction,
    ecliptic_to_equatorial, equatorial_to_horizontal, horizontal_parallax, parallactic_angle,
};
use almanac_time::{Instant, local_sidereal_time_rad};

/// Mean elements as `[value at J2000 (deg), rate (deg/day)]`.
#[rustfmt::skip]
mod elements {
    /// Mean longitude L′.
    pub const MEAN_LONGITUDE: [f64; 2]        = [218.316, 13.176_396];
    /// Mean anomaly M′.
    pub const MEAN_ANOMALY: [f64; 2]          = [134.963, 13.064_993];
    /// Mean distance from the ascending node (argument of latitude) F.
    pub const ARGUMENT_OF_LATITUDE: [f64; 2]  = [ 93.272, 13.229_350];
}

/// Amplitude of the equation of centre in longitude, degrees.
const LONGITUDE_AMPLITUDE_DEG: f64 = 6.289;

/// Amplitude of the latitude term, degrees.
const LATITUDE_AMPLITUDE_DEG: f64 = 5.128;

/// Mean Earth–Moon distance and its leading periodic term, km.
const MEAN_DISTANCE_KM: f64 = 385_001.0;
const DISTANCE_AMPLITUDE_KM: f64 = 20_905.0;

/// Geocentric lunar coordinates at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonCoords {
    /// Ecliptic longitude, radians (unwrapped).
    pub longitude_rad: f64,
    /// Ecliptic latitude, radians.
    pub latitude_rad: f64,
    /// Right ascension, radians.
    pub ra_rad: f64,
    /// Declination, radians.
    pub dec_rad: f64,
    /// Distance from the Earth's centre, km.
    pub distance_km: f64,
}

impl MoonCoords {
    /// Equatorial part of the coordinates.
    pub fn equatorial(&self) -> EquatorialCoords {
        EquatorialCoords {
            ra_rad: self.ra_rad,
            dec_rad: self.dec_rad,
        }
    }
}

/// Apparent position of the Moon for a ground observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Azimuth in radians from south, westward positive.
    pub azimuth_rad: f64,
    /// Geocentric altitude corrected for refraction, radians.
    pub altitude_rad: f64,
    /// Earth–Moon distance, km.
    pub distance_km: f64,
    /// Parallactic angle, radians.
    pub parallactic_angle_rad: f64,
    /// Horizontal parallax for the current distance, radians.
    pub parallax_rad: f64,
}

impl MoonPosition {
    /// Azimuth and altitude only.
    pub fn horizontal(&self) -> HorizontalCoords {
        HorizontalCoords {
            azimuth_rad: self.azimuth_rad,
            altitude_rad: self.altitude_rad,
        }
    }

    /// Altitude as seen from the observer rather than the Earth's centre.
    pub fn topocentric_altitude_rad(&self) -> f64 {
        self.altitude_rad - self.parallax_rad
    }
}

fn linear_deg(element: [f64; 2], d: f64) -> f64 {
    DEG_TO_RAD * (element[0] + element[1] * d)
}

/// Lunar coordinates `d` days after J2000.0.
pub fn moon_coords(d: f64) -> MoonCoords {
    let l0 = linear_deg(elements::MEAN_LONGITUDE, d);
    let m = linear_deg(elements::MEAN_ANOMALY, d);
    let f = linear_deg(elements::ARGUMENT_OF_LATITUDE, d);

    let longitude = l0 + DEG_TO_RAD * LONGITUDE_AMPLITUDE_DEG * m.sin();
    let latitude = DEG_TO_RAD * LATITUDE_AMPLITUDE_DEG * f.sin();
    let distance_km = MEAN_DISTANCE_KM - DISTANCE_AMPLITUDE_KM * m.cos();

    let eq = ecliptic_to_equatorial(longitude, latitude);
    MoonCoords {
        longitude_rad: longitude,
        latitude_rad: latitude,
        ra_rad: eq.ra_rad,
        dec_rad: eq.dec_rad,
        distance_km,
    }
}

/// Position of the Moon at `instant` for an observer at `location`.
///
/// The altitude includes atmospheric refraction; parallax is reported
/// separately (see [`MoonPosition::topocentric_altitude_rad`]).
pub fn moon_position(instant: Instant, location: &GeoLocation) -> MoonPosition {
    let d = instant.days_since_j2000();
    let phi = location.latitude_rad();
    let lst = local_sidereal_time_rad(d, location.longitude_west_rad());
    let c = moon_coords(d);

    let (coords, h) = equatorial_to_horizontal(&c.equatorial(), phi, lst);
    let altitude = coords.altitude_rad + astro_refraction(coords.altitude_rad);

    MoonPosition {
        azimuth_rad: coords.azimuth_rad,
        altitude_rad: altitude,
        distance_km: c.distance_km,
        parallactic_angle_rad: parallactic_angle(h, phi, c.dec_rad),
        parallax_rad: horizontal_parallax(c.distance_km),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_within_perigee_apogee() {
        for i in 0..400 {
            let c = moon_coords(i as f64 * 0.75);
            assert!(
                (364_000.0..=406_000.0).contains(&c.distance_km),
                "distance = {}",
                c.distance_km
            );
        }
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        for i in 0..400 {
            let c = moon_coords(i as f64 * 0.75);
            assert!(c.latitude_rad.to_degrees().abs() <= 5.128 + 1e-9);
        }
    }

    #[test]
    fn longitude_advances_about_13_deg_per_day() {
        let a = moon_coords(1000.0).longitude_rad;
        let b = moon_coords(1001.0).longitude_rad;
        let rate = (b - a).to_degrees();
        assert!((10.0..16.0).contains(&rate), "rate = {rate}°/day");
    }

    #[test]
    fn parallax_matches_distance() {
        let t = Instant::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
        let pos = moon_position(t, &GeoLocation::new(50.5, 30.5));
        let expected = horizontal_parallax(pos.distance_km);
        assert_eq!(pos.parallax_rad, expected);
        assert!(pos.topocentric_altitude_rad() < pos.altitude_rad);
    }

    #[test]
    fn refraction_lifts_altitude() {
        let t = Instant::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
        let loc = GeoLocation::new(50.5, 30.5);
        let d = t.days_since_j2000();
        let c = moon_coords(d);
        let lst = local_sidereal_time_rad(d, loc.longitude_west_rad());
        let (geometric, _) = equatorial_to_horizontal(&c.equatorial(), loc.latitude_rad(), lst);
        let pos = moon_position(t, &loc);
        assert!(pos.altitude_rad > geometric.altitude_rad);
        assert_eq!(pos.azimuth_rad, geometric.azimuth_rad);
    }
}
