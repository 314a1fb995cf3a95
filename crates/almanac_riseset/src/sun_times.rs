//! Solar light-phase times by the closed-form hour-angle method.
//!
//! The Sun's declination barely moves within a day, so each threshold
//! crossing follows directly from the transit time and the hour angle at
//! which the Sun reaches the threshold altitude:
//!
//!   cos H = (sin h − sin φ sin δ) / (cos φ cos δ)
//!
//! Transit comes from mean solar noon at the observer's longitude plus an
//! equation-of-time correction from the Sun's mean anomaly and ecliptic
//! longitude. Events are symmetric about transit.
//!
//! Sources: standard spherical astronomy (Meeus ch. 15; the "Sunrise
//! equation" formulation with the J0 = 0.0009 offset).

use std::f64::consts::TAU;

use almanac_ephem::sun_coords;
use almanac_frames::{DEG_TO_RAD, GeoLocation};
use almanac_time::{Instant, J2000_JD};
use log::debug;

use crate::riseset_types::{PhaseKind, PhaseRegistry, SunEvent, SunTimes};

/// Offset in days between mean solar noon and the integer Julian cycle.
const J0: f64 = 0.0009;

/// Round half toward +∞.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Julian cycle number: whole days from J2000 to the local mean noon nearest `d`.
fn julian_cycle(d: f64, lw: f64) -> f64 {
    round_half_up(d - J0 - lw / TAU)
}

/// Days since J2000 when the Sun's hour angle equals `ht`, ignoring the
/// equation of time.
fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

/// Julian Date of the event `ds` days after J2000 corrected by the
/// equation of time.
fn solar_transit_jd(ds: f64, m: f64, l: f64) -> f64 {
    J2000_JD + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which the Sun stands at altitude `h`.
///
/// NaN when `|cos H| > 1`, i.e. the altitude is never reached.
fn hour_angle_at_altitude(h: f64, phi: f64, dec: f64) -> f64 {
    ((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos()
}

/// Light-phase times for the day containing `date` at `location`.
///
/// The day is the one whose local mean noon lies nearest `date`, so passing
/// UTC midnight of a calendar date gives that date's events for any
/// longitude within ±180°. Phases the Sun never reaches come back with
/// `time: None`; solar noon and nadir are always filled for finite input.
pub fn sun_times(date: Instant, location: &GeoLocation, registry: &PhaseRegistry) -> SunTimes {
    let lw = location.longitude_west_rad();
    let phi = location.latitude_rad();

    let d = date.days_since_j2000();
    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);

    let sun = sun_coords(ds);
    let (m, l, dec) = (sun.mean_anomaly_rad, sun.ecliptic_longitude_rad, sun.dec_rad);
    let j_noon = solar_transit_jd(ds, m, l);

    let mut events = Vec::with_capacity(registry.len() * 2);
    for phase in registry.phases() {
        let h0 = phase.target_altitude_deg(location.height_m) * DEG_TO_RAD;
        let w = hour_angle_at_altitude(h0, phi, dec);
        let j_set = solar_transit_jd(approx_transit(w, lw, n), m, l);
        let j_rise = j_noon - (j_set - j_noon);

        let rise = Instant::from_jd(j_rise);
        let set = Instant::from_jd(j_set);
        if rise.is_none() || set.is_none() {
            debug!(
                "sun never crosses {}° ({}/{}) at lat {}",
                phase.altitude_deg, phase.rising, phase.setting, location.latitude_deg
            );
        }

        events.push(SunEvent {
            name: phase.rising.clone(),
            kind: PhaseKind::Rising,
            altitude_deg: phase.altitude_deg,
            time: rise,
        });
        events.push(SunEvent {
            name: phase.setting.clone(),
            kind: PhaseKind::Setting,
            altitude_deg: phase.altitude_deg,
            time: set,
        });
    }

    SunTimes {
        solar_noon: Instant::from_jd(j_noon),
        nadir: Instant::from_jd(j_noon - 0.5),
        events,
    }
}
