//! Records that may carry a geographic position.
//!
//! Restaurants, riders and customer addresses all come out of the
//! database with nullable `latitude` and `longitude` columns. The
//! proximity functions should not care which kind of record they get,
//! so they take anything implementing [`Located`].
//!
//! [`LocatedEntity`] is the plain implementation for callers that only
//! have an id and a pair of optional coordinates.

use serde::{Deserialize, Serialize};

use super::location::Location;

/// A record that may or may not know where it is.
pub trait Located {
    /// Latitude in degrees, if recorded.
    fn latitude(&self) -> Option<f64>;

    /// Longitude in degrees, if recorded.
    fn longitude(&self) -> Option<f64>;

    /// Both coordinates as a [`Location`], or [`None`] if either is
    /// absent. A stored `0.0` counts as present here.
    fn location(&self) -> Option<Location> {
        Some(Location::new(self.latitude()?, self.longitude()?))
    }
}

/// A generic located record, e.g. a restaurant or a rider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedEntity {
    /// Id of the underlying record.
    pub uid: String,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LocatedEntity {
    pub fn new(uid: impl Into<String>, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        LocatedEntity {
            uid: uid.into(),
            latitude,
            longitude,
        }
    }

    /// Shorthand for an entity with both coordinates present.
    pub fn at(uid: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::new(uid, Some(latitude), Some(longitude))
    }
}

impl Located for LocatedEntity {
    fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

impl Located for Location {
    fn latitude(&self) -> Option<f64> {
        Some(self.latitude.into_inner())
    }

    fn longitude(&self) -> Option<f64> {
        Some(self.longitude.into_inner())
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn latitude(&self) -> Option<f64> {
        (**self).latitude()
    }

    fn longitude(&self) -> Option<f64> {
        (**self).longitude()
    }
}
