//! Convenience API for the almanac engine.
//!
//! Flat functions taking an [`Instant`] and plain latitude/longitude degrees,
//! so callers do not need to build locations, registries or configs for the
//! common cases. Everything here is pure and thread-safe.
//!
//! # Quick start
//!
//! ```rust
//! use almanac_rs::*;
//!
//! let date = parse_instant("2013-03-05").unwrap();
//! let day = times(date, 50.5, 30.5, 0.0);
//! if let Some(sunrise) = day.get("sunrise") {
//!     println!("sunrise at {sunrise}");
//! }
//!
//! let moon = moon_illumination(date);
//! println!("moon {:.0}% lit", moon.fraction * 100.0);
//! ```

pub mod convenience;
pub mod error;

// Primary re-exports: users should only need `use almanac_rs::*`
pub use convenience::{
    add_time, checked_location, moon_illumination, moon_position, moon_times, parse_instant,
    position, times, times_with,
};
pub use error::AlmanacError;

// Re-export value types so callers don't need the inner crates directly.
pub use almanac_ephem::{MoonIllumination, MoonPosition};
pub use almanac_frames::{GeoLocation, HorizontalCoords, LocationError};
pub use almanac_riseset::{
    DEFAULT_PHASES, DayAnchor, MoonTimes, MoonTimesConfig, NADIR, PhaseDescriptor, PhaseKind,
    PhaseRegistry, SOLAR_NOON, SunEvent, SunTimes, observer_dip_deg,
};
pub use almanac_time::{Instant, TimeError};
