//! Geofence - point-in-polygon and polygon-within-polygon containment
//!
//! This library provides the containment engine used to filter sightings,
//! geofences and subscriptions by geographic bounds, along with the
//! shared types and store used by the `geofence` binary.

pub mod config;
pub mod error;
pub mod models;
pub mod pip;

pub use error::GeoError;
pub use models::{Geofence, LatLng, Polygon};
pub use pip::{point_in_polygon, polygon_within_polygon, GeofenceStore};
