//! Lunar illumination: illuminated fraction, phase and bright-limb angle.
//!
//! Geometry from Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 48:
//! geocentric elongation ψ between Sun and Moon, phase angle i at the Moon,
//! and the position angle χ of the bright limb.

use std::f64::consts::PI;

use almanac_time::Instant;

use crate::moon::moon_coords;
use crate::sun::{SUN_DISTANCE_KM, sun_coords};

/// Illumination of the Moon's disk at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disk, [0, 1].
    pub fraction: f64,
    /// Position in the synodic cycle, [0, 1): 0 new, 0.25 first quarter,
    /// 0.5 full, 0.75 last quarter.
    pub phase: f64,
    /// Position angle of the bright limb's midpoint, radians, measured
    /// eastward from north. Negative while waxing.
    pub angle_rad: f64,
}

/// Illuminated fraction, phase and bright-limb angle at `instant`.
pub fn moon_illumination(instant: Instant) -> MoonIllumination {
    let d = instant.days_since_j2000();
    let s = sun_coords(d);
    let m = moon_coords(d);

    let d_ra = s.ra_rad - m.ra_rad;
    let elongation = (s.dec_rad.sin() * m.dec_rad.sin()
        + s.dec_rad.cos() * m.dec_rad.cos() * d_ra.cos())
    .acos();
    let phase_angle = (SUN_DISTANCE_KM * elongation.sin())
        .atan2(m.distance_km - SUN_DISTANCE_KM * elongation.cos());
    let angle = (s.dec_rad.cos() * d_ra.sin()).atan2(
        s.dec_rad.sin() * m.dec_rad.cos() - s.dec_rad.cos() * m.dec_rad.sin() * d_ra.cos(),
    );

    let waning = if angle < 0.0 { -1.0 } else { 1.0 };
    let phase = 0.5 + 0.5 * phase_angle * waning / PI;

    MoonIllumination {
        fraction: (1.0 + phase_angle.cos()) / 2.0,
        phase: if phase >= 1.0 { phase - 1.0 } else { phase },
        angle_rad: angle,
    }
}
