//! In-memory geofence store with containment queries.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use hashbrown::HashMap;
use rayon::prelude::*;
use tracing::{debug, info};
use uuid::Uuid;

use super::{point_in_polygon, polygon_within_polygon};
use crate::models::{Geofence, GeofenceRecord, LatLng, Polygon};

/// Owns a set of geofences for the lifetime of the value.
///
/// Queries test every fence (there is no spatial index) and return
/// matches in insertion order.
#[derive(Debug, Default)]
pub struct GeofenceStore {
    fences: Vec<Arc<Geofence>>,
    /// Position of each fence in `fences`
    by_id: HashMap<Uuid, usize>,
}

impl GeofenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_geofences(fences: impl IntoIterator<Item = Geofence>) -> Self {
        let mut store = Self::new();
        for fence in fences {
            store.insert(fence);
        }
        store
    }

    /// Load a JSON array of geofence records.
    ///
    /// Two records sharing an id make the whole file invalid.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read geofence file {}", path.display()))?;
        let records: Vec<GeofenceRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse geofence file {}", path.display()))?;

        let mut store = Self::new();
        for record in records {
            if let Some(old) = store.insert(Geofence::from(record)) {
                anyhow::bail!(
                    "Duplicate geofence id {} in {}",
                    old.id,
                    path.display()
                );
            }
        }
        info!("Loaded {} geofences from {}", store.len(), path.display());
        Ok(store)
    }

    /// Insert a fence, returning the one it replaced if the id was taken.
    ///
    /// A replacement keeps the original insertion position.
    pub fn insert(&mut self, fence: Geofence) -> Option<Arc<Geofence>> {
        let fence = Arc::new(fence);
        match self.by_id.get(&fence.id).copied() {
            Some(idx) => Some(std::mem::replace(&mut self.fences[idx], fence)),
            None => {
                self.by_id.insert(fence.id, self.fences.len());
                self.fences.push(fence);
                None
            }
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<&Arc<Geofence>> {
        self.by_id.get(id).map(|&idx| &self.fences[idx])
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<Arc<Geofence>> {
        let idx = self.by_id.remove(id)?;
        let fence = self.fences.remove(idx);
        for later in &self.fences[idx..] {
            if let Some(pos) = self.by_id.get_mut(&later.id) {
                *pos -= 1;
            }
        }
        Some(fence)
    }

    pub fn len(&self) -> usize {
        self.fences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fences.is_empty()
    }

    /// Iterate over all fences in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Geofence>> {
        self.fences.iter()
    }

    /// Find all fences containing a point
    pub fn containing(&self, point: LatLng) -> Vec<Arc<Geofence>> {
        let found: Vec<Arc<Geofence>> = self
            .fences
            .par_iter()
            .filter(|fence| point_in_polygon(&fence.polygon, point))
            .map(Arc::clone)
            .collect();

        debug!(
            "Containing lookup at {}: {} of {} geofences",
            point,
            found.len(),
            self.fences.len()
        );
        found
    }

    /// Find all fences whose polygon lies within `bounds`
    pub fn within(&self, bounds: &Polygon) -> Vec<Arc<Geofence>> {
        let found: Vec<Arc<Geofence>> = self
            .fences
            .par_iter()
            .filter(|fence| polygon_within_polygon(&fence.polygon, bounds))
            .map(Arc::clone)
            .collect();

        debug!(
            "Within lookup over {}-point bounds: {} of {} geofences",
            bounds.len(),
            found.len(),
            self.fences.len()
        );
        found
    }
}
