//! Bounding extents for fit-to-view camera moves

use serde::{Deserialize, Serialize};

use crate::point::LngLat;

/// An axis-aligned geographic bounding box, in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Extent {
    /// The whole-world extent
    pub const WORLD: Extent = Extent {
        west: -180.0,
        south: -90.0,
        east: 180.0,
        north: 90.0,
    };

    /// Create an extent from corner coordinates
    #[inline]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self { west, south, east, north }
    }

    /// Tight bounding box of a ring of points
    ///
    /// An empty ring yields a degenerate zero extent; callers build
    /// extents from rings the geometry engine produced, which are
    /// never empty.
    pub fn of_ring(ring: &[LngLat]) -> Self {
        let mut west = f64::INFINITY;
        let mut south = f64::INFINITY;
        let mut east = f64::NEG_INFINITY;
        let mut north = f64::NEG_INFINITY;

        for p in ring {
            west = west.min(p.lng);
            south = south.min(p.lat);
            east = east.max(p.lng);
            north = north.max(p.lat);
        }

        if ring.is_empty() {
            return Self::new(0.0, 0.0, 0.0, 0.0);
        }
        Self { west, south, east, north }
    }

    /// Smallest extent covering both inputs
    pub fn union(self, other: Extent) -> Extent {
        Extent {
            west: self.west.min(other.west),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            north: self.north.max(other.north),
        }
    }

    /// Extent grown by `degrees` on every side, clamped to the world
    pub fn padded(self, degrees: f64) -> Extent {
        Extent {
            west: (self.west - degrees).max(Extent::WORLD.west),
            south: (self.south - degrees).max(Extent::WORLD.south),
            east: (self.east + degrees).min(Extent::WORLD.east),
            north: (self.north + degrees).min(Extent::WORLD.north),
        }
    }

    /// Center point of the extent
    pub fn center(&self) -> LngLat {
        LngLat::new((self.west + self.east) * 0.5, (self.south + self.north) * 0.5)
    }

    /// Width in degrees of longitude
    #[inline]
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height in degrees of latitude
    #[inline]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// True if `point` lies within the extent (inclusive)
    pub fn contains(&self, point: LngLat) -> bool {
        (self.west..=self.east).contains(&point.lng)
            && (self.south..=self.north).contains(&point.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_ring_bounds() {
        let ring = [
            LngLat::new(-118.26, 34.04),
            LngLat::new(-118.24, 34.06),
            LngLat::new(-118.25, 34.05),
        ];
        let extent = Extent::of_ring(&ring);
        assert!((extent.west - (-118.26)).abs() < 1e-12);
        assert!((extent.east - (-118.24)).abs() < 1e-12);
        assert!((extent.south - 34.04).abs() < 1e-12);
        assert!((extent.north - 34.06).abs() < 1e-12);
    }

    #[test]
    fn test_union_covers_both() {
        let a = Extent::new(-1.0, -1.0, 0.0, 0.0);
        let b = Extent::new(0.5, 0.5, 2.0, 3.0);
        let u = a.union(b);
        assert!(u.contains(LngLat::new(-1.0, -1.0)));
        assert!(u.contains(LngLat::new(2.0, 3.0)));
    }

    #[test]
    fn test_padded_clamps_to_world() {
        let extent = Extent::new(-179.5, -89.5, 179.5, 89.5).padded(1.0);
        assert_eq!(extent, Extent::WORLD);
    }

    #[test]
    fn test_center() {
        let extent = Extent::new(-118.30, 34.00, -118.20, 34.10);
        let c = extent.center();
        assert!((c.lng - (-118.25)).abs() < 1e-9);
        assert!((c.lat - 34.05).abs() < 1e-9);
    }

    #[test]
    fn test_empty_ring_degenerate() {
        let extent = Extent::of_ring(&[]);
        assert_eq!(extent, Extent::new(0.0, 0.0, 0.0, 0.0));
    }
}
