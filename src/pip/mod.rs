//! Point-in-Polygon (PIP) containment engine.
//!
//! Pure functions over [`Polygon`](crate::models::Polygon) and
//! [`LatLng`](crate::models::LatLng), plus a geofence store and a bounds
//! filter built on them. The functions hold no state and are safe to
//! call from any number of threads.

mod containment;
mod filter;
mod ray_cast;
mod store;

pub use containment::polygon_within_polygon;
pub use filter::{filter_within, Located};
pub use ray_cast::{point_in_polygon, CROSSING_EPSILON};
pub use store::GeofenceStore;
