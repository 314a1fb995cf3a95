//! Types for solar light-phase and lunar rise/set calculations.
//!
//! Provides the phase descriptors and registry that configure the Sun
//! solver, and the result and configuration types of both solvers.

use std::borrow::Cow;

use almanac_time::Instant;

/// Result name of the Sun's upper transit.
pub const SOLAR_NOON: &str = "solarNoon";
/// Result name of the Sun's lower transit.
pub const NADIR: &str = "nadir";

/// Dip of the visible horizon below the astronomical one, in degrees, for an
/// observer `height_m` above the surrounding terrain.
///
/// `−2.076° × √h / 60`, i.e. about −1.5° at 2000 m. Always ≤ 0.
pub fn observer_dip_deg(height_m: f64) -> f64 {
    -2.076 * height_m.sqrt() / 60.0
}

/// Which side of transit an event falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Before solar noon; the Sun is climbing through the threshold.
    Rising,
    /// After solar noon; the Sun is sinking through the threshold.
    Setting,
}

/// One altitude threshold and the names of its morning and evening events.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseDescriptor {
    /// Solar altitude of the threshold, degrees (negative below the horizon).
    pub altitude_deg: f64,
    /// Name of the morning crossing.
    pub rising: Cow<'static, str>,
    /// Name of the evening crossing.
    pub setting: Cow<'static, str>,
    /// Whether the threshold is measured against the visible horizon and
    /// therefore shifts with observer height.
    pub horizon_anchored: bool,
}

impl PhaseDescriptor {
    /// A threshold fixed relative to the astronomical horizon.
    pub const fn new(altitude_deg: f64, rising: &'static str, setting: &'static str) -> Self {
        Self {
            altitude_deg,
            rising: Cow::Borrowed(rising),
            setting: Cow::Borrowed(setting),
            horizon_anchored: false,
        }
    }

    /// A threshold tied to the visible horizon (sunrise, sunset).
    pub const fn horizon(altitude_deg: f64, rising: &'static str, setting: &'static str) -> Self {
        Self {
            altitude_deg,
            rising: Cow::Borrowed(rising),
            setting: Cow::Borrowed(setting),
            horizon_anchored: true,
        }
    }

    /// A threshold with runtime names.
    pub fn custom(
        altitude_deg: f64,
        rising: impl Into<Cow<'static, str>>,
        setting: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            altitude_deg,
            rising: rising.into(),
            setting: setting.into(),
            horizon_anchored: false,
        }
    }

    /// Target altitude in degrees for an observer `height_m` up.
    pub fn target_altitude_deg(&self, height_m: f64) -> f64 {
        if self.horizon_anchored {
            self.altitude_deg + observer_dip_deg(height_m)
        } else {
            self.altitude_deg
        }
    }

    /// Event name for one side of transit.
    pub fn name(&self, kind: PhaseKind) -> &str {
        match kind {
            PhaseKind::Rising => &self.rising,
            PhaseKind::Setting => &self.setting,
        }
    }
}

/// The standard light phases, in result order.
///
/// −0.833° puts the Sun's upper limb on the horizon under standard refraction;
/// −0.3° has the lower limb touching it.
pub const DEFAULT_PHASES: [PhaseDescriptor; 6] = [
    PhaseDescriptor::horizon(-0.833, "sunrise", "sunset"),
    PhaseDescriptor::new(-0.3, "sunriseEnd", "sunsetStart"),
    PhaseDescriptor::new(-6.0, "dawn", "dusk"),
    PhaseDescriptor::new(-12.0, "nauticalDawn", "nauticalDusk"),
    PhaseDescriptor::new(-18.0, "nightEnd", "night"),
    PhaseDescriptor::new(6.0, "goldenHourEnd", "goldenHour"),
];

/// An ordered, immutable list of phase descriptors.
///
/// Extending a registry returns a new one, so a shared registry can be handed
/// to any number of concurrent callers.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseRegistry {
    phases: Vec<PhaseDescriptor>,
}

impl Default for PhaseRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl PhaseRegistry {
    /// The [`DEFAULT_PHASES`].
    pub fn standard() -> Self {
        Self {
            phases: DEFAULT_PHASES.to_vec(),
        }
    }

    /// A registry with no phases; only noon and nadir will be computed.
    pub fn empty() -> Self {
        Self { phases: Vec::new() }
    }

    /// A copy of this registry with `phase` appended.
    pub fn with_phase(&self, phase: PhaseDescriptor) -> Self {
        let mut phases = Vec::with_capacity(self.phases.len() + 1);
        phases.extend_from_slice(&self.phases);
        phases.push(phase);
        Self { phases }
    }

    /// A copy of this registry with a custom threshold appended.
    pub fn add_time(
        &self,
        altitude_deg: f64,
        rising: impl Into<Cow<'static, str>>,
        setting: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.with_phase(PhaseDescriptor::custom(altitude_deg, rising, setting))
    }

    /// Descriptors in order.
    pub fn phases(&self) -> &[PhaseDescriptor] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

/// One named threshold crossing of a day.
#[derive(Debug, Clone, PartialEq)]
pub struct SunEvent {
    /// Event name from its descriptor.
    pub name: Cow<'static, str>,
    /// Morning or evening crossing.
    pub kind: PhaseKind,
    /// Threshold altitude as configured, degrees.
    pub altitude_deg: f64,
    /// When it happens; `None` if the Sun never reaches the threshold
    /// (polar day or polar night for this altitude).
    pub time: Option<Instant>,
}

/// Light-phase times of one day.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    /// Upper transit. `None` only for non-finite input.
    pub solar_noon: Option<Instant>,
    /// Lower transit, twelve hours before solar noon.
    pub nadir: Option<Instant>,
    /// For each descriptor in registry order, its rising then its setting event.
    pub events: Vec<SunEvent>,
}

impl SunTimes {
    /// Time of a named event, including [`SOLAR_NOON`] and [`NADIR`].
    ///
    /// With duplicate names the first in registry order wins.
    pub fn get(&self, name: &str) -> Option<Instant> {
        match name {
            SOLAR_NOON => self.solar_noon,
            NADIR => self.nadir,
            _ => self
                .events
                .iter()
                .find(|e| e.name == name)
                .and_then(|e| e.time),
        }
    }

    /// All names with their times: noon, nadir, then events in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<Instant>)> {
        [(SOLAR_NOON, self.solar_noon), (NADIR, self.nadir)]
            .into_iter()
            .chain(self.events.iter().map(|e| (e.name.as_ref(), e.time)))
    }

    /// Events that occur, solar noon included, sorted by time.
    ///
    /// The nadir is left out: it belongs to the night before.
    pub fn chronological(&self) -> Vec<(&str, Instant)> {
        let mut out: Vec<(&str, Instant)> = self
            .iter()
            .filter(|(name, _)| *name != NADIR)
            .filter_map(|(name, t)| t.map(|t| (name, t)))
            .collect();
        out.sort_by_key(|&(_, t)| t);
        out
    }
}

/// Which midnight starts the day searched for Moon rise/set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayAnchor {
    /// Local mean midnight at the observer's longitude (UTC − λ/15 h).
    #[default]
    LocalMean,
    /// 00:00 UTC.
    Utc,
}

/// Configurable parameters for Moon rise/set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonTimesConfig {
    /// Start of the 24-hour search window.
    pub anchor: DayAnchor,
    /// Altitude of the Moon's centre at rise/set, above the refracted
    /// horizon, in degrees. Default 0.133 (semi-diameter less parallax
    /// residual).
    pub horizon_offset_deg: f64,
}

impl Default for MoonTimesConfig {
    fn default() -> Self {
        Self {
            anchor: DayAnchor::LocalMean,
            horizon_offset_deg: 0.133,
        }
    }
}

impl MoonTimesConfig {
    /// Default offset, with the window anchored at UTC midnight.
    pub fn utc() -> Self {
        Self {
            anchor: DayAnchor::Utc,
            ..Default::default()
        }
    }
}

/// Moon rise and set within one 24-hour window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoonTimes {
    pub rise: Option<Instant>,
    pub set: Option<Instant>,
    /// No crossing and the Moon stayed above the horizon.
    pub always_up: bool,
    /// No crossing and the Moon stayed below the horizon.
    pub always_down: bool,
}
