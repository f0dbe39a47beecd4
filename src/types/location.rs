//! Struct definitions and implementations for [`Location`].
//!
//! Coordinates coming from browsers, rider devices or address lookups
//! are not trusted. Use [`validate_coordinates`] (or
//! [`validate_coordinate_values`] for raw JSON) before handing them to
//! the distance functions.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::CoordinateError;

/// Latitude bound in degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Longitude bound in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// A [`Location`] is a geographic position of a restaurant, a rider or a
/// customer, in decimal degrees.
///
/// Values are wrapped in [`OrderedFloat`] so locations can be compared,
/// hashed and used as map keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location without range checks.
    ///
    /// The Haversine formula accepts any finite input, so this is what
    /// internal callers use once the values have been validated upstream.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Creates a location, rejecting NaN and out-of-range values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if latitude.is_nan() || longitude.is_nan() {
            return Err(CoordinateError::NotANumber);
        }
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }
        Ok(Location::new(latitude, longitude))
    }

    /// Whether this location satisfies [`validate_coordinates`].
    pub fn is_valid(&self) -> bool {
        validate_coordinates(self.latitude.into_inner(), self.longitude.into_inner())
    }
}

/// Returns `true` iff both values are finite, `lat` is within
/// `[-90, 90]` and `lon` is within `[-180, 180]`.
///
/// Never panics.
pub fn validate_coordinates(lat: f64, lon: f64) -> bool {
    Location::try_new(lat, lon).is_ok()
}

/// Same as [`validate_coordinates`] but for untyped input such as a
/// request body. Anything that is not a JSON number is rejected.
pub fn validate_coordinate_values(lat: &Value, lon: &Value) -> bool {
    match (lat.as_f64(), lon.as_f64()) {
        (Some(lat), Some(lon)) => validate_coordinates(lat, lon),
        _ => {
            debug!("non-numeric coordinates: lat={}, lon={}", lat, lon);
            false
        }
    }
}
