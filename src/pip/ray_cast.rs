//! Point-in-polygon test by ray casting (even-odd rule).
//!
//! A horizontal ray is cast from the query point towards +lng and every
//! ring edge it crosses toggles the inside flag. Coordinates are planar:
//! lng is x and lat is y, with no spherical correction. That is fine for
//! city-scale geofences but not for rings spanning a large part of the
//! globe or crossing the antimeridian.
//!
//! Points lying exactly on an edge or vertex get whatever the crossing
//! tie-break below yields. An edge whose lower endpoint sits on the ray
//! counts and one whose upper endpoint does not, so a point on the left
//! or bottom boundary tends to come out inside and one on the right or
//! top boundary outside. Callers must not rely on either answer.
//!
//! The crossing divides by the edge's latitude span plus
//! [`CROSSING_EPSILON`]. For a downward edge whose span is exactly
//! `-CROSSING_EPSILON` the divisor is zero and the crossing goes to
//! +/-inf (NaN for a vertical edge). Such an edge then toggles for every
//! point on the ray or for none, which can flip the answer. Only edges
//! about 1e-12 degrees tall can hit this.

use crate::models::{LatLng, Polygon};

/// Added to the edge's latitude span before dividing
pub const CROSSING_EPSILON: f64 = 1e-12;

/// Whether `point` lies inside `polygon`.
///
/// Total on any input: rings with fewer than 3 points contain nothing.
pub fn point_in_polygon(polygon: &Polygon, point: LatLng) -> bool {
    let vertices = polygon.points();
    if polygon.is_degenerate() {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;

    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].lng, vertices[i].lat);
        let (xj, yj) = (vertices[j].lng, vertices[j].lat);

        let straddles = (yi > point.lat) != (yj > point.lat);
        if straddles {
            let x_cross = xi + (point.lat - yi) * (xj - xi) / (yj - yi + CROSSING_EPSILON);
            if point.lng < x_cross {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}
