//! Geographic value types and service-area geometry for the pin map
//!
//! Pure, side-effect-free building blocks consumed by the layer engine:
//!
//! - [`LngLat`] / [`LngLatDelta`]: coordinate and drag-offset values
//! - [`Circle`]: closed polygon approximating a disk around a center
//! - [`Mask`]: the complement polygon used to dim the rest of the map
//! - [`Extent`]: bounding boxes for fit-to-view camera moves
//! - [`geojson`]: the wire shapes pushed to render-surface sources
//!
//! Everything here is deterministic: identical inputs produce identical
//! geometry, which is what lets the engine recompute on every pointer
//! move without reconciliation.

mod circle;
mod error;
mod extent;
pub mod geojson;
mod mask;
mod point;
mod units;

pub use circle::{Circle, CIRCLE_STEPS};
pub use error::GeometryError;
pub use extent::Extent;
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use mask::Mask;
pub use point::{LngLat, LngLatDelta, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};
pub use units::{DistanceUnit, EARTH_RADIUS_M};
