//! Circular service-area polygon

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::extent::Extent;
use crate::geojson::{Feature, Geometry};
use crate::point::LngLat;
use crate::units::DistanceUnit;

/// Number of perimeter vertices in a circle ring
///
/// Fixed regardless of radius or zoom; 64 keeps the outline smooth at
/// typical city zoom levels.
pub const CIRCLE_STEPS: usize = 64;

/// A closed polygon approximating a disk around a center point
///
/// The ring is closed: the first vertex is repeated as the last. The
/// ring is a derived snapshot; construct a new circle rather than
/// mutating one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: LngLat,
    radius: f64,
    unit: DistanceUnit,
    ring: Vec<LngLat>,
}

impl Circle {
    /// Build a circle of `radius` (in `unit`) around `center`
    ///
    /// Perimeter points are computed by the spherical destination
    /// formula, stepping the bearing through a full turn.
    pub fn new(center: LngLat, radius: f64, unit: DistanceUnit) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        let center = center.validate()?;

        let angular = unit.to_central_angle(radius);
        let lat1 = center.lat.to_radians();
        let lng1 = center.lng.to_radians();
        let (sin_lat1, cos_lat1) = (lat1.sin(), lat1.cos());
        let (sin_d, cos_d) = (angular.sin(), angular.cos());

        // Negative bearing step yields a counterclockwise exterior
        // ring, the orientation GeoJSON expects.
        let mut ring = Vec::with_capacity(CIRCLE_STEPS + 1);
        for i in 0..CIRCLE_STEPS {
            let bearing = -(i as f64) * std::f64::consts::TAU / (CIRCLE_STEPS as f64);
            let sin_lat2 = sin_lat1 * cos_d + cos_lat1 * sin_d * bearing.cos();
            let lat2 = sin_lat2.asin();
            let lng2 = lng1
                + (bearing.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * sin_lat2);
            ring.push(LngLat::new(lng2.to_degrees(), lat2.to_degrees()));
        }
        ring.push(ring[0]);

        Ok(Self { center, radius, unit, ring })
    }

    /// Center of the circle
    #[inline]
    pub fn center(&self) -> LngLat {
        self.center
    }

    /// Radius in this circle's unit
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit the radius is expressed in
    #[inline]
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Closed perimeter ring (first vertex == last)
    #[inline]
    pub fn ring(&self) -> &[LngLat] {
        &self.ring
    }

    /// Hit test: is `point` within the circle's radius of the center?
    pub fn contains(&self, point: LngLat) -> bool {
        self.center.distance_to(point, self.unit) <= self.radius
    }

    /// Bounding extent of the perimeter ring
    pub fn extent(&self) -> Extent {
        Extent::of_ring(&self.ring)
    }

    /// The ring as GeoJSON polygon coordinates (single exterior ring)
    pub fn to_coordinates(&self) -> Vec<Vec<[f64; 2]>> {
        vec![self.ring.iter().map(|p| p.to_position()).collect()]
    }

    /// The circle as a GeoJSON polygon feature
    pub fn to_feature(&self) -> Feature {
        Feature::new(Geometry::Polygon {
            coordinates: self.to_coordinates(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn la_center() -> LngLat {
        LngLat::new(-118.25, 34.05)
    }

    #[test]
    fn test_ring_is_closed() {
        let circle = Circle::new(la_center(), 1.0, DistanceUnit::Miles).unwrap();
        let ring = circle.ring();
        assert_eq!(ring.len(), CIRCLE_STEPS + 1);
        assert_eq!(ring[0], ring[ring.len() - 1]);
    }

    #[test]
    fn test_vertices_lie_on_radius() {
        let center = la_center();
        let circle = Circle::new(center, 1.0, DistanceUnit::Miles).unwrap();

        for p in circle.ring() {
            let d = center.distance_to(*p, DistanceUnit::Miles);
            assert!(d <= 1.01, "vertex {:?} at {} miles", p, d);
            assert!(d >= 0.99, "vertex {:?} at {} miles", p, d);
        }
    }

    #[test]
    fn test_idempotent_construction() {
        let a = Circle::new(la_center(), 2.5, DistanceUnit::Kilometers).unwrap();
        let b = Circle::new(la_center(), 2.5, DistanceUnit::Kilometers).unwrap();

        assert_eq!(a.ring().len(), b.ring().len());
        for (pa, pb) in a.ring().iter().zip(b.ring()) {
            assert!((pa.lng - pb.lng).abs() < 1e-12);
            assert!((pa.lat - pb.lat).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(
            Circle::new(la_center(), 0.0, DistanceUnit::Miles),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert!(Circle::new(la_center(), -1.0, DistanceUnit::Miles).is_err());
        assert!(Circle::new(la_center(), f64::NAN, DistanceUnit::Miles).is_err());
    }

    #[test]
    fn test_rejects_bad_center() {
        let bad = LngLat::new(-200.0, 34.05);
        assert!(matches!(
            Circle::new(bad, 1.0, DistanceUnit::Miles),
            Err(GeometryError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_contains_center_and_excludes_far_point() {
        let circle = Circle::new(la_center(), 1.0, DistanceUnit::Miles).unwrap();
        assert!(circle.contains(la_center()));
        // About 5.7 miles east
        assert!(!circle.contains(LngLat::new(-118.15, 34.05)));
    }

    #[test]
    fn test_feature_has_single_ring() {
        let circle = Circle::new(la_center(), 1.0, DistanceUnit::Miles).unwrap();
        let Geometry::Polygon { coordinates } = circle.to_feature().geometry;
        assert_eq!(coordinates.len(), 1);
        assert_eq!(coordinates[0].len(), CIRCLE_STEPS + 1);
    }
}
