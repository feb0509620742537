//! Bounds filtering for anything with a location (sightings, signals).

use super::point_in_polygon;
use crate::models::{LatLng, Polygon};

/// A record that sits at a single geographic point
pub trait Located {
    fn location(&self) -> LatLng;
}

impl Located for LatLng {
    fn location(&self) -> LatLng {
        *self
    }
}

/// Keep the items whose location lies inside `bounds`, in input order
pub fn filter_within<'a, T: Located>(bounds: &Polygon, items: &'a [T]) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| point_in_polygon(bounds, item.location()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sighting {
        id: u32,
        at: LatLng,
    }

    impl Located for Sighting {
        fn location(&self) -> LatLng {
            self.at
        }
    }

    fn viewport() -> Polygon {
        Polygon::from_pairs(&[(35.0, -105.0), (35.0, -85.0), (15.0, -85.0), (15.0, -105.0)])
            .unwrap()
    }

    #[test]
    fn test_filter_keeps_order() {
        let sightings = vec![
            Sighting { id: 1, at: LatLng::new(25.0, -95.0) },
            Sighting { id: 2, at: LatLng::new(40.0, -95.0) },
            Sighting { id: 3, at: LatLng::new(16.0, -104.0) },
            Sighting { id: 4, at: LatLng::new(25.0, -80.0) },
        ];

        let ids: Vec<u32> = filter_within(&viewport(), &sightings)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_plain_points() {
        let points = [LatLng::new(20.0, -90.0), LatLng::new(0.0, 0.0)];
        assert_eq!(filter_within(&viewport(), &points), vec![&points[0]]);
    }

    #[test]
    fn test_degenerate_bounds_match_nothing() {
        let bounds = Polygon::from_points_unchecked(vec![LatLng::new(0.0, 0.0)]);
        let points = [LatLng::new(0.0, 0.0)];
        assert!(filter_within(&bounds, &points).is_empty());
    }
}
