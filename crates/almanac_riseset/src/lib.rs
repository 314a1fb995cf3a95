//! Rise, set and twilight computations for the Sun and Moon.
//!
//! This crate provides:
//! - Configurable solar light phases ([`PhaseRegistry`]) and a closed-form
//!   solver for their daily crossings ([`sun_times`])
//! - Moon rise/set over a 24-hour window by sampled altitude and parabolic
//!   interpolation ([`moon_times`])
//!
//! Absent events (polar day/night, no lunar crossing) are `None`, never an
//! error.

pub mod moon_times;
pub mod riseset_types;
pub mod sun_times;

pub use moon_times::{day_start, moon_times};
pub use riseset_types::{
    DEFAULT_PHASES, DayAnchor, MoonTimes, MoonTimesConfig, NADIR, PhaseDescriptor, PhaseKind,
    PhaseRegistry, SOLAR_NOON, SunEvent, SunTimes, observer_dip_deg,
};
pub use sun_times::sun_times;
