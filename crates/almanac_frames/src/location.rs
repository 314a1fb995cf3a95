//! Observer location on the Earth's surface.

use crate::error::LocationError;
use crate::DEG_TO_RAD;

/// Geographic location of an observer.
///
/// Construction never fails: the almanac services accept any numbers and let
/// NaN propagate. Call [`validate`](Self::validate) to reject nonsense input
/// up front.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Observer height above sea level in meters.
    pub height_m: f64,
}

impl GeoLocation {
    /// Location at sea level.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_m: 0.0,
        }
    }

    /// Same location at a given height above sea level.
    pub fn with_height(self, height_m: f64) -> Self {
        Self { height_m, ..self }
    }

    /// Latitude φ in radians.
    pub fn latitude_rad(&self) -> f64 {
        DEG_TO_RAD * self.latitude_deg
    }

    /// West-positive longitude `lw` in radians, as used by hour-angle formulas.
    pub fn longitude_west_rad(&self) -> f64 {
        DEG_TO_RAD * -self.longitude_deg
    }

    /// Check that every field is finite and in its physical range.
    pub fn validate(&self) -> Result<(), LocationError> {
        if !self.latitude_deg.is_finite() {
            return Err(LocationError::NotFinite("latitude"));
        }
        if !self.longitude_deg.is_finite() {
            return Err(LocationError::NotFinite("longitude"));
        }
        if !self.height_m.is_finite() {
            return Err(LocationError::NotFinite("height"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(LocationError::Latitude(self.latitude_deg));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(LocationError::Longitude(self.longitude_deg));
        }
        if self.height_m < 0.0 {
            return Err(LocationError::Height(self.height_m));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radians() {
        let loc = GeoLocation::new(50.5, 30.5);
        assert!((loc.latitude_rad() - 50.5_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude_west_rad() + 30.5_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn with_height_keeps_coordinates() {
        let loc = GeoLocation::new(50.5, 30.5).with_height(2000.0);
        assert_eq!(loc.latitude_deg, 50.5);
        assert_eq!(loc.longitude_deg, 30.5);
        assert_eq!(loc.height_m, 2000.0);
    }

    #[test]
    fn validate_accepts_extremes() {
        assert!(GeoLocation::new(90.0, -180.0).validate().is_ok());
        assert!(GeoLocation::new(-90.0, 180.0).with_height(8848.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert_eq!(
            GeoLocation::new(91.0, 0.0).validate(),
            Err(LocationError::Latitude(91.0))
        );
        assert_eq!(
            GeoLocation::new(0.0, -181.0).validate(),
            Err(LocationError::Longitude(-181.0))
        );
        assert_eq!(
            GeoLocation::new(0.0, 0.0).with_height(-1.0).validate(),
            Err(LocationError::Height(-1.0))
        );
    }

    #[test]
    fn validate_rejects_nan() {
        assert_eq!(
            GeoLocation::new(f64::NAN, 0.0).validate(),
            Err(LocationError::NotFinite("latitude"))
        );
    }
}
