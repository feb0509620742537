//! Geofence records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BoundingBox, Polygon};

/// A named polygon region used to scope sightings and subscriptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geofence {
    pub id: Uuid,
    pub name: String,
    pub polygon: Polygon,
    pub created_at: DateTime<Utc>,
}

impl Geofence {
    /// Create a geofence with a fresh id
    pub fn new(name: impl Into<String>, polygon: Polygon) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            polygon,
            created_at: Utc::now(),
        }
    }

    pub fn bbox(&self) -> Option<BoundingBox> {
        self.polygon.bbox()
    }
}

/// Geofence as written in JSON input files
///
/// `id` is optional; records without one get a fresh id on load.
#[derive(Debug, Clone, Deserialize)]
pub struct GeofenceRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub polygon: Polygon,
}

impl From<GeofenceRecord> for Geofence {
    fn from(record: GeofenceRecord) -> Self {
        let mut fence = Geofence::new(record.name, record.polygon);
        if let Some(id) = record.id {
            fence.id = id;
        }
        fence
    }
}
