//! Delivery time estimates.
//!
//! An estimate is the kitchen's preparation time plus the time a rider
//! needs to cover the distance at an average speed. Estimates are
//! rounded up to whole minutes so customers are not promised too early.

use serde::{Deserialize, Serialize};

use crate::types::error::DeliveryProfileError;
use crate::types::location::Location;
use crate::utils::haversine;

/// Average rider speed in city traffic.
pub const AVG_SPEED_KMH: f64 = 25.0;
/// Time before the rider leaves the restaurant.
pub const BASE_PREPARATION_MINUTES: f64 = 5.0;

/// Profile used by [`estimate_delivery_time_minutes`].
pub const DEFAULT_PROFILE: DeliveryProfile = DeliveryProfile {
    average_speed_kmh: AVG_SPEED_KMH,
    base_minutes: BASE_PREPARATION_MINUTES,
};

/// Parameters of the delivery estimate.
///
/// Deserialising goes through [`DeliveryProfile::new`], so a profile
/// loaded from a config file is always valid. Missing fields fall back to
/// [`AVG_SPEED_KMH`] and [`BASE_PREPARATION_MINUTES`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDeliveryProfile")]
pub struct DeliveryProfile {
    average_speed_kmh: f64,
    base_minutes: f64,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawDeliveryProfile {
    average_speed_kmh: f64,
    base_minutes: f64,
}

impl Default for RawDeliveryProfile {
    fn default() -> Self {
        RawDeliveryProfile {
            average_speed_kmh: AVG_SPEED_KMH,
            base_minutes: BASE_PREPARATION_MINUTES,
        }
    }
}

impl TryFrom<RawDeliveryProfile> for DeliveryProfile {
    type Error = DeliveryProfileError;

    fn try_from(raw: RawDeliveryProfile) -> Result<Self, Self::Error> {
        DeliveryProfile::new(raw.average_speed_kmh, raw.base_minutes)
    }
}

impl Default for DeliveryProfile {
    fn default() -> Self {
        DEFAULT_PROFILE
    }
}

impl DeliveryProfile {
    /// Creates a profile. The speed must be finite and positive, the base
    /// time finite and non-negative.
    pub fn new(average_speed_kmh: f64, base_minutes: f64) -> Result<Self, DeliveryProfileError> {
        if !average_speed_kmh.is_finite() || average_speed_kmh <= 0.0 {
            return Err(DeliveryProfileError::InvalidSpeed(average_speed_kmh));
        }
        if !base_minutes.is_finite() || base_minutes < 0.0 {
            return Err(DeliveryProfileError::InvalidBaseMinutes(base_minutes));
        }
        Ok(DeliveryProfile {
            average_speed_kmh,
            base_minutes,
        })
    }

    pub fn average_speed_kmh(&self) -> f64 {
        self.average_speed_kmh
    }

    pub fn base_minutes(&self) -> f64 {
        self.base_minutes
    }

    /// Minutes to deliver over `distance_km`, rounded up.
    ///
    /// The distance is not validated. A negative distance shortens the
    /// estimate, possibly below zero, and the value is returned as is.
    /// Returns [`None`] only when the distance is NaN or infinite, so a
    /// bad input is never mistaken for a computed estimate.
    pub fn estimate_minutes(&self, distance_km: f64) -> Option<i64> {
        let travel_minutes = distance_km / self.average_speed_kmh * 60.0;
        let minutes = (self.base_minutes + travel_minutes).ceil();
        debug!(
            "distance_km: {}, travel_minutes: {}, estimate: {}",
            distance_km, travel_minutes, minutes
        );
        if !minutes.is_finite() {
            warn!("no delivery estimate for distance_km: {}", distance_km);
            return None;
        }
        Some(minutes as i64)
    }
}

/// Minutes to deliver over `distance_km` at 25 km/h plus 5 minutes of
/// preparation, rounded up. See [`DeliveryProfile::estimate_minutes`].
pub fn estimate_delivery_time_minutes(distance_km: f64) -> Option<i64> {
    DEFAULT_PROFILE.estimate_minutes(distance_km)
}

/// Estimate for an order going from `restaurant` to `customer`.
pub fn estimate_delivery_between(restaurant: &Location, customer: &Location) -> Option<i64> {
    estimate_delivery_time_minutes(haversine::distance_between(restaurant, customer))
}
