use std::borrow::Cow;

use almanac_ephem::{MoonIllumination, MoonPosition};
use almanac_frames::{GeoLocation, HorizontalCoords};
use almanac_riseset::{DayAnchor, MoonTimes, MoonTimesConfig, PhaseRegistry, SunTimes};
use almanac_time::Instant;

use crate::error::AlmanacError;

/// Azimuth and altitude of the Sun, radians.
///
/// Azimuth is measured from south, increasing toward west.
pub fn position(instant: Instant, lat: f64, lng: f64) -> HorizontalCoords {
    almanac_ephem::sun_position(instant, &GeoLocation::new(lat, lng))
}

/// Standard light-phase times for the day of `date`.
///
/// `height_m` lowers the visible horizon, moving sunrise earlier and sunset
/// later; twilight boundaries are unaffected.
pub fn times(date: Instant, lat: f64, lng: f64, height_m: f64) -> SunTimes {
    let location = GeoLocation::new(lat, lng).with_height(height_m);
    almanac_riseset::sun_times(date, &location, &PhaseRegistry::standard())
}

/// Light-phase times for a caller-supplied set of phases.
pub fn times_with(date: Instant, location: &GeoLocation, registry: &PhaseRegistry) -> SunTimes {
    almanac_riseset::sun_times(date, location, registry)
}

/// Apparent position, distance and parallactic angle of the Moon.
pub fn moon_position(instant: Instant, lat: f64, lng: f64) -> MoonPosition {
    almanac_ephem::moon_position(instant, &GeoLocation::new(lat, lng))
}

/// Illuminated fraction, phase and bright-limb angle of the Moon.
pub fn moon_illumination(instant: Instant) -> MoonIllumination {
    almanac_ephem::moon_illumination(instant)
}

/// Moon rise and set for the day of `date`.
///
/// With `use_utc_midnight` the search window starts at 00:00 UTC; otherwise
/// at local mean midnight for `lng`.
pub fn moon_times(date: Instant, lat: f64, lng: f64, use_utc_midnight: bool) -> MoonTimes {
    let config = MoonTimesConfig {
        anchor: if use_utc_midnight {
            DayAnchor::Utc
        } else {
            DayAnchor::LocalMean
        },
        ..MoonTimesConfig::default()
    };
    almanac_riseset::moon_times(date, &GeoLocation::new(lat, lng), &config)
}

/// A new registry with one more phase at `angle_deg`.
///
/// `registry` itself is left as it was.
pub fn add_time(
    registry: &PhaseRegistry,
    angle_deg: f64,
    rise_name: impl Into<Cow<'static, str>>,
    set_name: impl Into<Cow<'static, str>>,
) -> PhaseRegistry {
    registry.add_time(angle_deg, rise_name, set_name)
}

/// Parse an instant from RFC 3339, `YYYY-MM-DDThh:mm:ss` (UTC) or `YYYY-MM-DD`.
pub fn parse_instant(text: &str) -> Result<Instant, AlmanacError> {
    Ok(text.trim().parse::<Instant>()?)
}

/// A location whose coordinates have been range-checked.
pub fn checked_location(lat: f64, lng: f64, height_m: f64) -> Result<GeoLocation, AlmanacError> {
    let location = GeoLocation::new(lat, lng).with_height(height_m);
    location.validate()?;
    Ok(location)
}
