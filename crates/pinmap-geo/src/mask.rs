//! Complement polygon used to dim the map outside the region

use serde::{Deserialize, Serialize};

use crate::circle::Circle;
use crate::extent::Extent;
use crate::geojson::{Feature, Geometry};
use crate::point::LngLat;

/// Polygon covering everything outside a circle, within the world extent
///
/// Exterior ring is the world boundary; the circle's ring becomes a
/// hole with reversed winding. Purely visual; never used for
/// hit-testing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mask {
    outer: Vec<LngLat>,
    hole: Vec<LngLat>,
}

impl Mask {
    /// Build the mask for a circle
    pub fn around(circle: &Circle) -> Self {
        let mut hole: Vec<LngLat> = circle.ring().to_vec();
        hole.reverse();

        Self {
            outer: world_ring(),
            hole,
        }
    }

    /// World exterior ring (closed)
    #[inline]
    pub fn outer(&self) -> &[LngLat] {
        &self.outer
    }

    /// Hole ring (the region cut out of the mask, closed)
    #[inline]
    pub fn hole(&self) -> &[LngLat] {
        &self.hole
    }

    /// The mask as a GeoJSON polygon feature with one hole
    pub fn to_feature(&self) -> Feature {
        Feature::new(Geometry::Polygon {
            coordinates: vec![
                self.outer.iter().map(|p| p.to_position()).collect(),
                self.hole.iter().map(|p| p.to_position()).collect(),
            ],
        })
    }
}

/// Closed counterclockwise ring tracing the world extent
fn world_ring() -> Vec<LngLat> {
    let Extent { west, south, east, north } = Extent::WORLD;
    vec![
        LngLat::new(west, south),
        LngLat::new(east, south),
        LngLat::new(east, north),
        LngLat::new(west, north),
        LngLat::new(west, south),
    ]
}
