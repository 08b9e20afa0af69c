//! GeoJSON wire types pushed to render-surface sources
//!
//! Only the shapes this engine actually emits are modeled: polygon
//! features and feature collections. Serialization matches the GeoJSON
//! object layout field for field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GeoJSON geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Polygon: exterior ring first, holes after, positions as [lng, lat]
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

/// A GeoJSON feature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Value,
}

impl Feature {
    /// Wrap a geometry in a feature with empty properties
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: Value::Object(serde_json::Map::new()),
        }
    }
}

/// A GeoJSON feature collection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// The canonical empty collection, used to clear a source
    pub fn empty() -> Self {
        Self { features: Vec::new() }
    }

    /// A collection holding a single feature
    pub fn single(feature: Feature) -> Self {
        Self { features: vec![feature] }
    }

    /// True if the collection holds no features
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
