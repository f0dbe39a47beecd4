//! Great-circle distance between two coordinates.
//!
//! See <https://en.wikipedia.org/wiki/Haversine_formula>.

use crate::types::location::Location;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between two points given in degrees, rounded
/// to 2 decimal places.
///
/// No range validation is done. Any finite input yields a number; NaN
/// input yields NaN.
///
/// # Arguments
/// * `lat1`, `lon1` - The first point.
/// * `lat2`, `lon2` - The second point.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_km(EARTH_RADIUS_KM * c)
}

/// [`distance`] between two [`Location`]s.
pub fn distance_between(from: &Location, to: &Location) -> f64 {
    distance(
        from.latitude.into_inner(),
        from.longitude.into_inner(),
        to.latitude.into_inner(),
        to.longitude.into_inner(),
    )
}

/// Rounds half away from zero to 2 decimal places.
fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
