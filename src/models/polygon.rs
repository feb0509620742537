//! Polygon ring type and its validation layer.

use geo::{BoundingRect, Coord, LineString};
use serde::{Deserialize, Serialize};

use super::LatLng;
use crate::error::GeoError;

/// Minimum number of vertices in a ring
pub const MIN_POINTS: usize = 3;

/// A simple polygon ring, implicitly closed (last point connects to first)
///
/// Rings may be concave and wound either way. Deserialization runs the
/// same checks as [`Polygon::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LatLng>", into = "Vec<LatLng>")]
pub struct Polygon {
    points: Vec<LatLng>,
}

impl Polygon {
    /// Validate and build a ring.
    ///
    /// An explicit closing point equal to the first point is dropped, so
    /// `[a, b, c, a]` and `[a, b, c]` produce the same polygon.
    pub fn new(points: Vec<LatLng>) -> Result<Self, GeoError> {
        let mut points = points;
        if points.len() > MIN_POINTS && points.first() == points.last() {
            points.pop();
        }

        if points.len() < MIN_POINTS {
            return Err(GeoError::TooFewPoints {
                count: points.len(),
            });
        }

        for p in &points {
            p.validate()?;
        }

        Ok(Self { points })
    }

    /// Wrap points as-is, skipping validation.
    ///
    /// The containment engine stays total on whatever this produces,
    /// including rings with fewer than 3 points.
    pub fn from_points_unchecked(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    /// Build from `(lat, lng)` pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, GeoError> {
        Self::new(
            pairs
                .iter()
                .map(|&(lat, lng)| LatLng::new(lat, lng))
                .collect(),
        )
    }

    /// Parse a JSON array of `{"lat": .., "lng": ..}` objects
    pub fn from_json(s: &str) -> Result<Self, GeoError> {
        let points: Vec<LatLng> = serde_json::from_str(s)?;
        Self::new(points)
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the ring has too few points to enclose anything
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < MIN_POINTS
    }

    /// Same ring with the opposite winding order
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Planar offset of every vertex
    pub fn translate(&self, dlat: f64, dlng: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translate(dlat, dlng)).collect(),
        }
    }

    fn ring(&self) -> LineString<f64> {
        LineString::new(self.points.iter().map(|&p| Coord::from(p)).collect())
    }

    /// Get the bounding box of this ring
    pub fn bbox(&self) -> Option<BoundingBox> {
        self.ring().bounding_rect().map(|rect| BoundingBox {
            min_lat: rect.min().y,
            min_lng: rect.min().x,
            max_lat: rect.max().y,
            max_lng: rect.max().x,
        })
    }

    /// Convert to a `geo` polygon (x = lng, y = lat, ring closed)
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(self.ring(), vec![])
    }
}

impl TryFrom<Vec<LatLng>> for Polygon {
    type Error = GeoError;

    fn try_from(points: Vec<LatLng>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Polygon> for Vec<LatLng> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

/// Axis-aligned envelope of a ring, inclusive on all sides
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.min_lat
            && p.lat <= self.max_lat
            && p.lng >= self.min_lng
            && p.lng <= self.max_lng
    }
}
