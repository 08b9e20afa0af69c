//! Committed region value reported to the application

use serde::Serialize;

use pinmap_geo::{Circle, LngLat};

/// The service area reported when a drag completes or a programmatic
/// recenter settles
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionResult {
    /// The region polygon
    pub geometry: Circle,
    /// Its center
    pub center: LngLat,
}
