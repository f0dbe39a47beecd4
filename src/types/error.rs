//! Error types for the typed constructors.
//!
//! The distance, radius and estimate operations never fail. Only the
//! checked constructors ([`Location::try_new`] and
//! [`DeliveryProfile::new`]) return these errors.
//!
//! [`Location::try_new`]: super::location::Location::try_new
//! [`DeliveryProfile::new`]: crate::utils::delivery::DeliveryProfile::new

use thiserror::Error;

/// Reasons a latitude/longitude pair is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("latitude or longitude is not a number")]
    NotANumber,

    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
}

/// Reasons a [`DeliveryProfile`](crate::utils::delivery::DeliveryProfile)
/// is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DeliveryProfileError {
    #[error("average speed must be a positive number of km/h, got {0}")]
    InvalidSpeed(f64),

    #[error("base preparation time must be a non-negative number of minutes, got {0}")]
    InvalidBaseMinutes(f64),
}
