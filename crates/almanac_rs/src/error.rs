//! Error type for the convenience API.

use almanac_frames::LocationError;
use almanac_time::TimeError;
use thiserror::Error;

/// Errors from the checked entry points ([`parse_instant`](crate::parse_instant),
/// [`checked_location`](crate::checked_location)).
///
/// The numeric operations themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AlmanacError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Location(#[from] LocationError),
}
