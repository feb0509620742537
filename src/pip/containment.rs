//! Polygon-within-polygon test.
//!
//! Containment is decided on vertices only: `inner` is within `outer`
//! when every vertex of `inner` passes [`point_in_polygon`] against
//! `outer`. An inner edge that leaves `outer` between two contained
//! vertices (through a concave notch, say) goes undetected. This is
//! accepted for viewport-style filtering and is not meant for alerting
//! on exact boundaries.

use super::point_in_polygon;
use crate::models::Polygon;

/// Whether every vertex of `inner` lies inside `outer`.
///
/// Rings with fewer than 3 points contain nothing and are contained by
/// nothing, so either side being degenerate yields `false`.
pub fn polygon_within_polygon(inner: &Polygon, outer: &Polygon) -> bool {
    if inner.is_degenerate() || outer.is_degenerate() {
        return false;
    }

    inner
        .points()
        .iter()
        .all(|&vertex| point_in_polygon(outer, vertex))
}
