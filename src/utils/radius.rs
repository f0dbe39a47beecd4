//! Radius membership and proximity queries over located records.
//!
//! These back the "restaurants near me" listing and rider matching.
//! None of the functions validate coordinate ranges; see
//! [`validate_coordinates`](crate::types::location::validate_coordinates).

use ordered_float::OrderedFloat;

use crate::types::entity::Located;
use crate::types::location::Location;
use crate::utils::haversine;

/// How [`filter_by_radius_with`] decides that an entity has no position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MissingCoordinates {
    /// An absent coordinate or one that is exactly `0.0` means "no
    /// position". Entities on the equator or the prime meridian are
    /// dropped. This is what the platform has always done.
    #[default]
    ZeroAsMissing,

    /// Only an absent coordinate means "no position".
    AbsentOnly,
}

impl MissingCoordinates {
    /// The entity's location, or [`None`] if it counts as missing under
    /// this policy.
    fn resolve(self, entity: &impl Located) -> Option<Location> {
        let lat = entity.latitude()?;
        let lon = entity.longitude()?;
        if self == MissingCoordinates::ZeroAsMissing && (lat == 0.0 || lon == 0.0) {
            return None;
        }
        Some(Location::new(lat, lon))
    }
}

/// Whether the point is within `radius_km` of the center. The boundary
/// is inclusive.
pub fn is_within_radius(
    center_lat: f64,
    center_lon: f64,
    point_lat: f64,
    point_lon: f64,
    radius_km: f64,
) -> bool {
    let km = haversine::distance(center_lat, center_lon, point_lat, point_lon);
    debug!("distance: {} km, radius: {} km", km, radius_km);
    km <= radius_km
}

/// Keeps the entities within `radius_km` of the center, in input order.
///
/// Entities with a missing latitude or longitude are skipped, and so are
/// entities where either coordinate is exactly `0.0`. Use
/// [`filter_by_radius_with`] and [`MissingCoordinates::AbsentOnly`] to
/// keep those.
pub fn filter_by_radius<T: Located>(
    center_lat: f64,
    center_lon: f64,
    entities: &[T],
    radius_km: f64,
) -> Vec<&T> {
    filter_by_radius_with(
        center_lat,
        center_lon,
        entities,
        radius_km,
        MissingCoordinates::ZeroAsMissing,
    )
}

/// [`filter_by_radius`] with an explicit missing-coordinate policy.
pub fn filter_by_radius_with<T: Located>(
    center_lat: f64,
    center_lon: f64,
    entities: &[T],
    radius_km: f64,
    policy: MissingCoordinates,
) -> Vec<&T> {
    entities
        .iter()
        .filter(|entity| match policy.resolve(*entity) {
            Some(location) => is_within_radius(
                center_lat,
                center_lon,
                location.latitude.into_inner(),
                location.longitude.into_inner(),
                radius_km,
            ),
            None => {
                trace!("skipping entity without coordinates");
                false
            }
        })
        .collect()
}

/// The entity closest to `center` together with its distance in km.
///
/// Positions are resolved with [`MissingCoordinates::AbsentOnly`]: only
/// entities with an absent coordinate are ignored, a coordinate of `0.0`
/// is a real position. On ties the first one wins. Returns [`None`] if no
/// entity has a position.
pub fn find_nearest<'a, T: Located>(center: &Location, entities: &'a [T]) -> Option<(&'a T, f64)> {
    info!("Finding nearest of {} entities", entities.len());
    let mut nearest: Option<(&T, f64)> = None;
    for entity in entities {
        let Some(location) = MissingCoordinates::AbsentOnly.resolve(entity) else {
            continue;
        };
        let km = haversine::distance_between(center, &location);
        debug!("candidate at {:?}: {} km", location, km);
        if nearest.map_or(true, |(_, best)| km < best) {
            nearest = Some((entity, km));
        }
    }
    debug!("nearest distance: {:?}", nearest.map(|(_, km)| km));
    nearest
}

/// Entities with a position, closest first, each paired with its distance
/// in km. When `radius_km` is set, entities farther than it are dropped.
///
/// Positions are resolved with [`MissingCoordinates::AbsentOnly`], unlike
/// [`filter_by_radius`]: entities on the equator or the prime meridian are
/// ranked, only absent coordinates are skipped.
///
/// The sort is stable, so entities at the same distance keep their input
/// order.
pub fn sort_by_distance<'a, T: Located>(
    center: &Location,
    entities: &'a [T],
    radius_km: Option<f64>,
) -> Vec<(&'a T, f64)> {
    let mut ranked: Vec<(&T, f64)> = entities
        .iter()
        .filter_map(|entity| {
            let location = MissingCoordinates::AbsentOnly.resolve(entity)?;
            Some((entity, haversine::distance_between(center, &location)))
        })
        .filter(|(_, km)| radius_km.map_or(true, |radius| *km <= radius))
        .collect();
    ranked.sort_by_key(|(_, km)| OrderedFloat(*km));
    ranked
}

#[cfg(test)]
mod radius_tests {
    use super::*;
    use crate::types::entity::LocatedEntity;

    /// Victoria Island, Lagos.
    const CENTER: (f64, f64) = (6.4281, 3.4219);

    fn uids<T: std::ops::Deref<Target = LocatedEntity>>(entities: &[T]) -> Vec<&str> {
        entities.iter().map(|e| e.uid.as_str()).collect()
    }

    #[test]
    fn test_zero_radius_is_inclusive() {
        assert!(is_within_radius(0.0, 0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let km = haversine::distance(CENTER.0, CENTER.1, 6.5244, 3.3792);
        assert!(is_within_radius(CENTER.0, CENTER.1, 6.5244, 3.3792, km));
        assert!(!is_within_radius(CENTER.0, CENTER.1, 6.5244, 3.3792, km - 0.01));
    }

    #[test]
    fn test_filter_preserves_order() {
        let entities = vec![
            LocatedEntity::at("a", 6.4300, 3.4200),
            LocatedEntity::at("b", 9.0765, 7.3986), // Abuja
            LocatedEntity::at("c", 6.4500, 3.4000),
        ];
        let before = entities.clone();
        let kept = filter_by_radius(CENTER.0, CENTER.1, &entities, 10.0);
        assert_eq!(uids(&kept), vec!["a", "c"]);
        assert_eq!(entities, before);
    }

    #[test]
    fn test_filter_skips_missing_and_zero_coordinates() {
        let entities = vec![
            LocatedEntity::new("no_lat", None, Some(0.01)),
            LocatedEntity::new("no_lon", Some(0.01), None),
            LocatedEntity::at("zero_lat", 0.0, 0.01),
            LocatedEntity::at("zero_lon", 0.01, 0.0),
            LocatedEntity::at("kept", 0.01, 0.01),
        ];
        let kept = filter_by_radius(0.0, 0.0, &entities, 100.0);
        assert_eq!(uids(&kept), vec!["kept"]);
    }

    #[test]
    fn test_filter_absent_only_keeps_zero_coordinates() {
        let entities = vec![
            LocatedEntity::new("no_lat", None, Some(0.01)),
            LocatedEntity::at("zero_lat", 0.0, 0.01),
            LocatedEntity::at("zero_lon", 0.01, 0.0),
            LocatedEntity::at("origin", 0.0, 0.0),
        ];
        let kept = filter_by_radius_with(
            0.0,
            0.0,
            &entities,
            100.0,
            MissingCoordinates::AbsentOnly,
        );
        assert_eq!(uids(&kept), vec!["zero_lat", "zero_lon", "origin"]);
    }

    #[test]
    fn test_filter_empty_input() {
        let entities: Vec<LocatedEntity> = vec![];
        assert!(filter_by_radius(CENTER.0, CENTER.1, &entities, 5.0).is_empty());
    }

    #[test]
    fn test_find_nearest() {
        let center = Location::new(CENTER.0, CENTER.1);
        let riders = vec![
            LocatedEntity::new("offline", None, None),
            LocatedEntity::at("ikeja", 6.6018, 3.3515),
            LocatedEntity::at("lekki", 6.4474, 3.4700),
            LocatedEntity::at("lekki_twin", 6.4474, 3.4700),
        ];
        let (rider, km) = find_nearest(&center, &riders).unwrap();
        assert_eq!(rider.uid, "lekki");
        assert_eq!(km, haversine::distance(CENTER.0, CENTER.1, 6.4474, 3.4700));
    }

    #[test]
    fn test_find_nearest_without_positions() {
        let center = Location::new(CENTER.0, CENTER.1);
        let riders = vec![LocatedEntity::new("offline", None, None)];
        assert!(find_nearest(&center, &riders).is_none());
        assert!(find_nearest::<LocatedEntity>(&center, &[]).is_none());
    }

    /// Ranking keeps zero coordinates that the radius filter drops.
    #[test]
    fn test_nearest_and_sort_keep_zero_coordinates() {
        let center = Location::new(0.0, 0.0);
        let entities = vec![
            LocatedEntity::new("no_lat", None, Some(0.01)),
            LocatedEntity::at("meridian", 0.05, 0.0),
            LocatedEntity::at("origin", 0.0, 0.0),
        ];

        let (nearest, km) = find_nearest(&center, &entities).unwrap();
        assert_eq!(nearest.uid, "origin");
        assert_eq!(km, 0.0);

        let ranked = sort_by_distance(&center, &entities, Some(100.0));
        let order: Vec<&str> = ranked.iter().map(|(e, _)| e.uid.as_str()).collect();
        assert_eq!(order, vec!["origin", "meridian"]);

        assert!(filter_by_radius(0.0, 0.0, &entities, 100.0).is_empty());
    }

    #[test]
    fn test_sort_by_distance() {
        let center = Location::new(CENTER.0, CENTER.1);
        let restaurants = vec![
            LocatedEntity::at("far", 6.6018, 3.3515),
            LocatedEntity::new("unknown", Some(6.43), None),
            LocatedEntity::at("near", 6.4300, 3.4200),
            LocatedEntity::at("abuja", 9.0765, 7.3986),
        ];

        let ranked = sort_by_distance(&center, &restaurants, None);
        let order: Vec<&str> = ranked.iter().map(|(e, _)| e.uid.as_str()).collect();
        assert_eq!(order, vec!["near", "far", "abuja"]);
        assert!(ranked.windows(2).all(|w| w[0].1 <= w[1].1));

        let ranked = sort_by_distance(&center, &restaurants, Some(50.0));
        let order: Vec<&str> = ranked.iter().map(|(e, _)| e.uid.as_str()).collect();
        assert_eq!(order, vec!["near", "far"]);
    }
}
