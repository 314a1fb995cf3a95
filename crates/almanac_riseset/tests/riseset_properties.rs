//! Property tests for the Sun and Moon rise/set solvers.
//!
//! Checks ordering, window and purity guarantees over random dates and
//! observer positions between 1950 and 2050.

use almanac_frames::GeoLocation;
use almanac_riseset::{
    MoonTimesConfig, PhaseRegistry, SOLAR_NOON, day_start, moon_times, sun_times,
};
use almanac_time::Instant;
use proptest::prelude::*;

const MS_1950: i64 = -631_152_000_000;
const MS_2050: i64 = 2_524_608_000_000;
const DAY_MS: i64 = 86_400_000;

/// Morning events from lowest to highest threshold.
const MORNING: [&str; 6] = [
    "nightEnd",
    "nauticalDawn",
    "dawn",
    "sunrise",
    "sunriseEnd",
    "goldenHourEnd",
];

/// Evening events from highest to lowest threshold.
const EVENING: [&str; 6] = [
    "goldenHour",
    "sunsetStart",
    "sunset",
    "dusk",
    "nauticalDusk",
    "night",
];

proptest! {
    #[test]
    fn phases_strictly_ordered_through_the_day(
        millis in MS_1950..MS_2050,
        latitude in -60.0_f64..=60.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let loc = GeoLocation::new(latitude, longitude);
        let times = sun_times(Instant::from_unix_millis(millis), &loc, &PhaseRegistry::standard());

        let sequence: Vec<Instant> = MORNING
            .iter()
            .chain(std::iter::once(&SOLAR_NOON))
            .chain(EVENING.iter())
            .filter_map(|name| times.get(name))
            .collect();
        for pair in sequence.windows(2) {
            prop_assert!(pair[0] < pair[1], "{} !< {} at lat {latitude}", pair[0], pair[1]);
        }
    }

    #[test]
    fn solar_noon_within_half_a_day(
        millis in MS_1950..MS_2050,
        latitude in -89.0_f64..=89.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let date = Instant::from_unix_millis(millis);
        let times = sun_times(date, &GeoLocation::new(latitude, longitude), &PhaseRegistry::standard());
        let noon = times.solar_noon.unwrap();
        // Nearest local mean noon, plus at most ~20 minutes equation of time.
        let limit = DAY_MS / 2 + 30 * 60 * 1000;
        prop_assert!((noon.unix_millis() - millis).abs() <= limit, "noon {noon} for {date}");
    }

    #[test]
    fn rising_and_setting_pair_up(
        millis in MS_1950..MS_2050,
        latitude in -89.0_f64..=89.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let times = sun_times(
            Instant::from_unix_millis(millis),
            &GeoLocation::new(latitude, longitude),
            &PhaseRegistry::standard(),
        );
        for pair in times.events.chunks(2) {
            prop_assert_eq!(pair[0].time.is_some(), pair[1].time.is_some());
        }
    }

    #[test]
    fn height_widens_the_day(
        millis in MS_1950..MS_2050,
        latitude in -55.0_f64..=55.0,
        longitude in -180.0_f64..=180.0,
        height in 100.0_f64..=5000.0,
    ) {
        let date = Instant::from_unix_millis(millis);
        let registry = PhaseRegistry::standard();
        let sea = sun_times(date, &GeoLocation::new(latitude, longitude), &registry);
        let high = sun_times(
            date,
            &GeoLocation::new(latitude, longitude).with_height(height),
            &registry,
        );
        prop_assert!(high.get("sunrise").unwrap() < sea.get("sunrise").unwrap());
        prop_assert!(high.get("sunset").unwrap() > sea.get("sunset").unwrap());
        prop_assert_eq!(high.get("sunriseEnd"), sea.get("sunriseEnd"));
        prop_assert_eq!(high.get("dawn"), sea.get("dawn"));
    }

    #[test]
    fn sun_times_is_pure(
        millis in MS_1950..MS_2050,
        latitude in -89.0_f64..=89.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let date = Instant::from_unix_millis(millis);
        let loc = GeoLocation::new(latitude, longitude);
        let registry = PhaseRegistry::standard().add_time(-4.0, "blueHourDawn", "blueHourDusk");
        prop_assert_eq!(sun_times(date, &loc, &registry), sun_times(date, &loc, &registry));
    }

    #[test]
    fn moon_times_stay_in_window(
        millis in MS_1950..MS_2050,
        latitude in -85.0_f64..=85.0,
        longitude in -180.0_f64..=180.0,
        utc in any::<bool>(),
    ) {
        let date = Instant::from_unix_millis(millis);
        let loc = GeoLocation::new(latitude, longitude);
        let config = if utc { MoonTimesConfig::utc() } else { MoonTimesConfig::default() };
        let start = day_start(date, &loc, config.anchor);
        let end = start.add_hours(25.0);

        let mt = moon_times(date, &loc, &config);
        for t in [mt.rise, mt.set].into_iter().flatten() {
            prop_assert!(t >= start && t <= end, "{t} outside {start}..{end}");
        }
        let found = mt.rise.is_some() || mt.set.is_some();
        prop_assert!(!(mt.always_up && mt.always_down));
        prop_assert_eq!(found, !(mt.always_up || mt.always_down));
        prop_assert!(start <= date && date.unix_millis() - start.unix_millis() < DAY_MS);
    }
}
