//! Layer configuration for engine construction

use serde_json::{json, Value};

use pinmap_geo::DistanceUnit;

/// Configuration for creating a service-area layer
///
/// Defaults reproduce the dashboard's styling: a thin white border, a
/// transparent (but hit-testable) fill, and a white mask whose opacity
/// fades in between zoom 10 and 13.
#[derive(Clone, Debug)]
pub struct LayerConfig {
    /// Id of the region geometry source
    pub source_id: String,
    /// Id of the mask geometry source
    pub mask_source_id: String,
    /// Id of the border line layer
    pub border_layer_id: String,
    /// Id of the fill layer
    pub fill_layer_id: String,
    /// Id of the mask fill layer
    pub mask_layer_id: String,
    /// Region radius used until `set_radius` changes it
    pub radius: f64,
    /// Unit of `radius`
    pub unit: DistanceUnit,
    /// Screen-pixel padding for fit-to-bounds camera moves
    pub fit_padding: f64,
    /// Paint for the border line layer
    pub border_paint: Value,
    /// Paint for the fill layer
    pub fill_paint: Value,
    /// Paint for the mask fill layer
    pub mask_paint: Value,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            source_id: "shed".to_string(),
            mask_source_id: "shed-mask".to_string(),
            border_layer_id: "shed-border".to_string(),
            fill_layer_id: "shed-fill".to_string(),
            mask_layer_id: "shed-mask-fill".to_string(),
            radius: 1.0,
            unit: DistanceUnit::Miles,
            fit_padding: 50.0,
            border_paint: json!({
                "line-width": 1.0,
                "line-color": "#FFFFFF",
            }),
            fill_paint: json!({
                "fill-color": "transparent",
            }),
            mask_paint: json!({
                "fill-color": "#FFFFFF",
                "fill-opacity": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    10, 0,
                    13, 0.2,
                ],
            }),
        }
    }
}
