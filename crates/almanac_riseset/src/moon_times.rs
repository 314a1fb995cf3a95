//! Moon rise and set by sampled altitude and quadratic interpolation.
//!
//! The Moon moves about 13° per day against the stars, so there is no useful
//! closed form like the Sun's. Instead the altitude above the rise/set
//! threshold is sampled hourly over a 24-hour window and each 2-hour chunk
//! `(t−1, t, t+1)` is fitted with a parabola. Roots of the parabola inside
//! the chunk are horizon crossings; the sign of the altitude at the chunk
//! start (or of the parabola's extremum, for two roots) tells rise from set.
//! With no crossing at all, the sign of the last sample says whether the Moon
//! stayed up or down.
//!
//! Sources: the "three-point interpolation" technique, Meeus ch. 3 and
//! Montenbruck & Pfleger, *Astronomy on the Personal Computer*, §3.8.

use almanac_ephem::moon_position;
use almanac_frames::{DEG_TO_RAD, GeoLocation};
use almanac_time::Instant;
use log::{debug, trace};

use crate::riseset_types::{DayAnchor, MoonTimes, MoonTimesConfig};

/// Hours in the search window.
const WINDOW_HOURS: u32 = 24;

/// Start of the 24-hour window containing `date` for the chosen anchor.
pub fn day_start(date: Instant, location: &GeoLocation, anchor: DayAnchor) -> Instant {
    match anchor {
        DayAnchor::Utc => date.start_of_utc_day(),
        DayAnchor::LocalMean => {
            let offset_h = location.longitude_deg / 15.0;
            date.add_hours(offset_h).start_of_utc_day().add_hours(-offset_h)
        }
    }
}

/// Parabola through three equally spaced samples at x = −1, 0, +1.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Parabola {
    a: f64,
    b: f64,
    c: f64,
}

/// Roots of a [`Parabola`] that fall inside [−1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
enum Crossings {
    None,
    /// One root at x.
    One(f64),
    /// Two roots, x1 < x2.
    Two(f64, f64),
}

/// Rise and set found in one chunk, as offsets from its middle sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ChunkEvents {
    rise: Option<f64>,
    set: Option<f64>,
}

impl Parabola {
    fn through(y_prev: f64, y_mid: f64, y_next: f64) -> Self {
        Self {
            a: (y_prev + y_next) / 2.0 - y_mid,
            b: (y_next - y_prev) / 2.0,
            c: y_mid,
        }
    }

    /// Abscissa and value of the vertex.
    fn extremum(&self) -> (f64, f64) {
        let xe = -self.b / (2.0 * self.a);
        (xe, (self.a * xe + self.b) * xe + self.c)
    }

    fn crossings(&self) -> Crossings {
        let disc = self.b * self.b - 4.0 * self.a * self.c;
        if disc.is_nan() || disc < 0.0 {
            return Crossings::None;
        }
        let (xe, _) = self.extremum();
        let dx = disc.sqrt() / (self.a.abs() * 2.0);
        let x1 = xe - dx;
        let x2 = xe + dx;

        match (x1.abs() <= 1.0, x2.abs() <= 1.0) {
            (true, true) => Crossings::Two(x1, x2),
            (true, false) => Crossings::One(x1),
            (false, true) => Crossings::One(x2),
            (false, false) => Crossings::None,
        }
    }

    /// Classify the roots as rise or set. `y_start` is the sample at x = −1.
    ///
    /// A lone root is a rise when the chunk starts below the horizon. Of two
    /// roots, the later one is the rise when the vertex is below the horizon.
    fn events(&self, y_start: f64) -> ChunkEvents {
        match self.crossings() {
            Crossings::None => ChunkEvents::default(),
            Crossings::One(x) if y_start < 0.0 => ChunkEvents {
                rise: Some(x),
                set: None,
            },
            Crossings::One(x) => ChunkEvents {
                rise: None,
                set: Some(x),
            },
            Crossings::Two(x1, x2) => {
                let (rise, set) = if self.extremum().1 < 0.0 {
                    (x2, x1)
                } else {
                    (x1, x2)
                };
                ChunkEvents {
                    rise: Some(rise),
                    set: Some(set),
                }
            }
        }
    }
}

/// Rise and set of the Moon in the 24 hours starting at the day anchor.
///
/// Each of rise and set is the first crossing of its kind in the window.
/// When neither happens the flags report whether the Moon stayed up or down.
pub fn moon_times(date: Instant, location: &GeoLocation, config: &MoonTimesConfig) -> MoonTimes {
    let start = day_start(date, location, config.anchor);
    let threshold = config.horizon_offset_deg * DEG_TO_RAD;
    let altitude =
        |hours: f64| moon_position(start.add_hours(hours), location).altitude_rad - threshold;

    let mut rise_h: Option<f64> = None;
    let mut set_h: Option<f64> = None;

    let mut h0 = altitude(0.0);
    for i in (1..=WINDOW_HOURS).step_by(2) {
        let hour = f64::from(i);
        let h1 = altitude(hour);
        let h2 = altitude(hour + 1.0);

        let events = Parabola::through(h0, h1, h2).events(h0);
        if let Some(x) = events.rise {
            rise_h = Some(hour + x);
        }
        if let Some(x) = events.set {
            set_h = Some(hour + x);
        }
        trace!("moon chunk at +{i}h: h0={h0:.5} h1={h1:.5} h2={h2:.5} {events:?}");

        if rise_h.is_some() && set_h.is_some() {
            break;
        }
        h0 = h2;
    }

    let mut result = MoonTimes {
        rise: rise_h.map(|h| start.add_hours(h)),
        set: set_h.map(|h| start.add_hours(h)),
        ..MoonTimes::default()
    };
    if rise_h.is_none() && set_h.is_none() {
        // h0 now holds the last sample of the window.
        if h0 > 0.0 {
            result.always_up = true;
        } else {
            result.always_down = true;
        }
        debug!(
            "no moon crossing from {start} at lat {}: always {}",
            location.latitude_deg,
            if result.always_up { "up" } else { "down" }
        );
    }
    result
}
