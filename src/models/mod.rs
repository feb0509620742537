//! Core data models for the containment engine.

pub mod geofence;
pub mod point;
pub mod polygon;

pub use geofence::{Geofence, GeofenceRecord};
pub use point::LatLng;
pub use polygon::{BoundingBox, Polygon};
