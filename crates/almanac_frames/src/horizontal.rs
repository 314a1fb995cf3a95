//! Equatorial → horizontal transform and the Moon's local corrections.
//!
//! Azimuth is measured from true south, increasing westward, so a body on
//! the meridian south of the observer has azimuth 0 and a rising body in
//! the east has azimuth near −π/2.

use crate::ecliptic::EquatorialCoords;

/// Equatorial Earth radius in km, for horizontal parallax.
pub const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Position on the observer's sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoords {
    /// Azimuth in radians from south, westward positive.
    pub azimuth_rad: f64,
    /// Altitude in radians above the astronomical horizon.
    pub altitude_rad: f64,
}

/// Azimuth for hour angle `h`, latitude `phi`, declination `dec` (radians).
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Altitude for hour angle `h`, latitude `phi`, declination `dec` (radians).
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Hour angle `H = θ − α`.
pub fn hour_angle(local_sidereal_rad: f64, ra_rad: f64) -> f64 {
    local_sidereal_rad - ra_rad
}

/// Convert equatorial coordinates to horizontal ones.
///
/// Returns the horizontal position together with the hour angle used, which
/// callers need for the parallactic angle.
pub fn equatorial_to_horizontal(
    eq: &EquatorialCoords,
    latitude_rad: f64,
    local_sidereal_rad: f64,
) -> (HorizontalCoords, f64) {
    let h = hour_angle(local_sidereal_rad, eq.ra_rad);
    let coords = HorizontalCoords {
        azimuth_rad: azimuth(h, latitude_rad, eq.dec_rad),
        altitude_rad: altitude(h, latitude_rad, eq.dec_rad),
    };
    (coords, h)
}

/// Parallactic angle q for hour angle `h`, latitude `phi`, declination `dec`.
///
/// Meeus, *Astronomical Algorithms* (2nd ed.), eq. 14.1.
pub fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(phi.tan() * dec.cos() - dec.sin() * h.cos())
}

/// Horizontal parallax of a body at `distance_km` from the Earth's centre.
///
/// `π = asin(R⊕ / Δ)`; about 0.95° for the Moon.
pub fn horizontal_parallax(distance_km: f64) -> f64 {
    (EARTH_RADIUS_KM / distance_km).asin()
}

/// Atmospheric refraction in radians for an apparent altitude `h` (radians).
///
/// Sæmundsson-style empirical fit (Meeus eq. 16.4), clamped at the horizon so
/// that bodies below it receive the horizon value instead of a blow-up.
pub fn astro_refraction(h: f64) -> f64 {
    let h = if h < 0.0 { 0.0 } else { h };
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}
