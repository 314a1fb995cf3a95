//! Ecliptic → equatorial conversion with a fixed obliquity.

use crate::DEG_TO_RAD;

/// Mean obliquity of the ecliptic, degrees (J2000, held constant).
pub const OBLIQUITY_DEG: f64 = 23.4397;

/// Mean obliquity of the ecliptic ε, radians.
pub const OBLIQUITY_RAD: f64 = DEG_TO_RAD * OBLIQUITY_DEG;

/// Equatorial coordinates of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension α in radians, range (−π, π].
    pub ra_rad: f64,
    /// Declination δ in radians, range [−π/2, π/2].
    pub dec_rad: f64,
}

/// Right ascension of ecliptic longitude `l`, latitude `b` (radians).
///
/// `α = atan2(sin l cos ε − tan b sin ε, cos l)`
pub fn right_ascension(l: f64, b: f64) -> f64 {
    let e = OBLIQUITY_RAD;
    (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos())
}

/// Declination of ecliptic longitude `l`, latitude `b` (radians).
///
/// `δ = asin(sin b cos ε + cos b sin ε sin l)`
pub fn declination(l: f64, b: f64) -> f64 {
    let e = OBLIQUITY_RAD;
    (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin()
}

/// Convert ecliptic (longitude, latitude) in radians to equatorial coordinates.
pub fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64) -> EquatorialCoords {
    EquatorialCoords {
        ra_rad: right_ascension(lon_rad, lat_rad),
        dec_rad: declination(lon_rad, lat_rad),
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn vernal_equinox_is_origin() {
        let eq = ecliptic_to_equatorial(0.0, 0.0);
        assert!(eq.ra_rad.abs() < EPS);
        assert!(eq.dec_rad.abs() < EPS);
    }

    #[test]
    fn summer_solstice_declination_is_obliquity() {
        let eq = ecliptic_to_equatorial(FRAC_PI_2, 0.0);
        assert!((eq.dec_rad - OBLIQUITY_RAD).abs() < EPS, "dec = {}", eq.dec_rad);
        assert!((eq.ra_rad - FRAC_PI_2).abs() < EPS, "ra = {}", eq.ra_rad);
    }

    #[test]
    fn autumn_equinox_ra_is_pi() {
        let eq = ecliptic_to_equatorial(PI, 0.0);
        assert!((eq.ra_rad.abs() - PI).abs() < EPS);
        assert!(eq.dec_rad.abs() < EPS);
    }

    #[test]
    fn ecliptic_pole_maps_to_equatorial_offset() {
        // North ecliptic pole sits at δ = 90° − ε.
        let dec = declination(0.0, FRAC_PI_2);
        assert!((dec - (FRAC_PI_2 - OBLIQUITY_RAD)).abs() < 1e-9, "dec = {dec}");
    }

    #[test]
    fn declination_bounded() {
        for i in 0..36 {
            let l = (i as f64 * 10.0).to_radians();
            for b in [-0.09, 0.0, 0.09] {
                let dec = declination(l, b);
                assert!(dec.abs() <= OBLIQUITY_RAD + 0.09 + EPS, "l={l} b={b} dec={dec}");
            }
        }
    }
}
