//! Error types for observer location checks.

use thiserror::Error;

/// Why a [`GeoLocation`](crate::GeoLocation) failed [`validate`](crate::GeoLocation::validate).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LocationError {
    /// A coordinate is NaN or infinite.
    #[error("{0} is not a finite number")]
    NotFinite(&'static str),
    /// Latitude outside [-90, 90] degrees.
    #[error("latitude {0}° is outside [-90, 90]")]
    Latitude(f64),
    /// Longitude outside [-180, 180] degrees.
    #[error("longitude {0}° is outside [-180, 180]")]
    Longitude(f64),
    /// Negative observer height.
    #[error("observer height {0} m is negative")]
    Height(f64),
}
