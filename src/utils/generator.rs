//! Random locations around a point, for seeding demo data and tests.

use rand::Rng;

use crate::types::location::Location;
use crate::utils::haversine::EARTH_RADIUS_KM;

/// Generates `count` locations uniformly distributed within `radius_km`
/// of `center`.
pub fn generate_locations_near(center: &Location, radius_km: f64, count: usize) -> Vec<Location> {
    generate_locations_near_with(&mut rand::thread_rng(), center, radius_km, count)
}

/// [`generate_locations_near`] with a caller supplied random source.
pub fn generate_locations_near_with<R: Rng + ?Sized>(
    rng: &mut R,
    center: &Location,
    radius_km: f64,
    count: usize,
) -> Vec<Location> {
    debug!(
        "generating {} locations within {} km of {:?}",
        count, radius_km, center
    );
    (0..count)
        .map(|_| {
            // sqrt keeps the density uniform over the disc
            let km = radius_km * rng.gen::<f64>().sqrt();
            let bearing = rng.gen_range(0.0..360.0);
            destination(center, bearing, km)
        })
        .collect()
}

/// The point reached by travelling `distance_km` from `start` along the
/// great circle with initial `bearing_degrees` (clockwise from north).
pub fn destination(start: &Location, bearing_degrees: f64, distance_km: f64) -> Location {
    let lat1 = start.latitude.into_inner().to_radians();
    let lon1 = start.longitude.into_inner().to_radians();
    let bearing = bearing_degrees.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Location::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees()))
}

/// Wraps a longitude into `[-180, 180)`.
fn normalize_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}
