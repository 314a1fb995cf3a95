//! Range and continuity properties of the Sun and Moon models.

use std::f64::consts::{FRAC_PI_2, PI};

use almanac_ephem::{moon_illumination, moon_position, sun_coords, sun_position};
use almanac_frames::{GeoLocation, OBLIQUITY_RAD};
use almanac_time::Instant;
use proptest::prelude::*;

const MS_1950: i64 = -631_152_000_000;
const MS_2050: i64 = 2_524_608_000_000;

proptest! {
    #[test]
    fn sun_horizontal_coords_in_range(
        millis in MS_1950..MS_2050,
        latitude in -90.0_f64..=90.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let pos = sun_position(Instant::from_unix_millis(millis), &GeoLocation::new(latitude, longitude));
        prop_assert!(pos.azimuth_rad.abs() <= PI + 1e-12);
        prop_assert!(pos.altitude_rad.abs() <= FRAC_PI_2 + 1e-12);
    }

    #[test]
    fn sun_declination_bounded_by_obliquity(d in -18_262.0_f64..18_262.0) {
        let s = sun_coords(d);
        prop_assert!(s.dec_rad.abs() <= OBLIQUITY_RAD + 1e-12);
    }

    #[test]
    fn moon_position_in_range(
        millis in MS_1950..MS_2050,
        latitude in -90.0_f64..=90.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let pos = moon_position(Instant::from_unix_millis(millis), &GeoLocation::new(latitude, longitude));
        prop_assert!(pos.azimuth_rad.abs() <= PI + 1e-12);
        // Refraction adds at most ~0.6° at the horizon.
        prop_assert!(pos.altitude_rad.abs() <= FRAC_PI_2 + 0.011);
        prop_assert!((364_000.0..=406_000.0).contains(&pos.distance_km));
        prop_assert!(pos.parallax_rad > 0.0 && pos.parallax_rad < 0.018);
    }

    #[test]
    fn illumination_in_range(millis in MS_1950..MS_2050) {
        let illum = moon_illumination(Instant::from_unix_millis(millis));
        prop_assert!((0.0..=1.0).contains(&illum.fraction), "fraction = {}", illum.fraction);
        prop_assert!((0.0..1.0).contains(&illum.phase), "phase = {}", illum.phase);
        prop_assert!(illum.angle_rad.abs() <= PI);
    }

    #[test]
    fn illumination_changes_slowly(millis in MS_1950..MS_2050) {
        let t = Instant::from_unix_millis(millis);
        let a = moon_illumination(t);
        let b = moon_illumination(t.add_hours(1.0));
        // About 1/59 of the cycle per hour at most.
        prop_assert!((a.fraction - b.fraction).abs() < 0.02);
    }
}
