//! Geographic Distance Library.
//! Handles distance, proximity and delivery time calculations for
//! restaurants, riders and customers.

#[macro_use]
extern crate log;

pub mod types {
    pub mod entity;
    pub mod error;
    pub mod location;
}

pub mod utils {
    pub mod delivery;
    pub mod generator;
    pub mod haversine;
    pub mod radius;
}

pub use types::entity::{Located, LocatedEntity};
pub use types::error::{CoordinateError, DeliveryProfileError};
pub use types::location::{validate_coordinate_values, validate_coordinates, Location};
pub use utils::delivery::{estimate_delivery_time_minutes, DeliveryProfile};
pub use utils::haversine::distance;
pub use utils::radius::{
    filter_by_radius, filter_by_radius_with, find_nearest, is_within_radius, sort_by_distance,
    MissingCoordinates,
};
