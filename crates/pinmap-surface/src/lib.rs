//! Render surface trait for the pin map
//!
//! This crate defines the contract the layer engine needs from the
//! underlying interactive map renderer, so the engine can run against
//! any backend (a WebGL map binding in production, a mock in tests)
//! without knowing which one it is talking to.
//!
//! The surface owns named GeoJSON data sources and named styled layers
//! bound to those sources. The engine mutates source payloads and layer
//! visibility, and requests camera moves; the embedding forwards the
//! renderer's pointer, touch, and camera-idle events back into the
//! engine's `handle_*` methods.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use pinmap_geo::{Extent, FeatureCollection};

/// Layer visibility, matching the renderer's layout property values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Layer is drawn
    #[default]
    Visible,
    /// Layer is not drawn
    None,
}

/// Pointer cursor shown over the map canvas
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    /// The renderer's default cursor
    #[default]
    Default,
    /// Hovering a draggable region
    Move,
    /// Pointer pressed, drag not yet started
    Grab,
    /// Actively dragging
    Grabbing,
}

impl Cursor {
    /// CSS cursor name; the default maps to the empty string so the
    /// canvas falls back to its own styling
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "",
            Cursor::Move => "move",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Kind of styled layer bound to a source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Stroked outline
    Line,
    /// Filled polygon
    Fill,
}

/// Description of a styled layer to register with the surface
///
/// `paint` is a data-driven property object in the renderer's own
/// vocabulary (plain values or interpolation expressions), passed
/// through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Layer id, unique per surface
    pub id: String,
    /// Id of the source this layer draws
    pub source: String,
    /// Line or fill
    pub kind: LayerKind,
    /// Initial visibility
    pub visibility: Visibility,
    /// Renderer paint properties
    pub paint: Value,
}

/// Options for a fit-to-bounds camera move
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FitOptions {
    /// Padding around the bounds, in screen pixels
    pub padding: f64,
}

/// Errors reported by a render surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// No source registered under this id
    SourceNotFound(String),
    /// No layer registered under this id
    LayerNotFound(String),
    /// A source with this id already exists
    DuplicateSource(String),
    /// A layer with this id already exists
    DuplicateLayer(String),
    /// The camera cannot be moved right now
    CameraUnavailable,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::SourceNotFound(id) => write!(f, "source not found: {}", id),
            SurfaceError::LayerNotFound(id) => write!(f, "layer not found: {}", id),
            SurfaceError::DuplicateSource(id) => write!(f, "source already exists: {}", id),
            SurfaceError::DuplicateLayer(id) => write!(f, "layer already exists: {}", id),
            SurfaceError::CameraUnavailable => write!(f, "camera unavailable"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Render surface abstraction
///
/// Implementations provide renderer-specific behavior for:
/// - GeoJSON source registration and mutation
/// - Styled layer registration and visibility
/// - Canvas cursor styling
/// - Camera fit-to-bounds transitions
///
/// Camera transitions are asynchronous: `fit_bounds` starts the move
/// and returns; when the renderer settles, the embedding reports it to
/// the engine (`handle_camera_idle`). The trait itself carries no
/// callbacks, keeping implementations object-safe and the event flow
/// in one place.
pub trait RenderSurface {
    /// Register a GeoJSON source
    ///
    /// # Returns
    /// * `Err(SurfaceError::DuplicateSource)` - id already registered
    fn add_source(&mut self, id: &str, data: FeatureCollection) -> Result<(), SurfaceError>;

    /// Replace a source's GeoJSON payload
    ///
    /// # Returns
    /// * `Err(SurfaceError::SourceNotFound)` - id not registered
    fn set_source_data(&mut self, id: &str, data: FeatureCollection) -> Result<(), SurfaceError>;

    /// Register a styled layer bound to an existing source
    ///
    /// # Returns
    /// * `Err(SurfaceError::DuplicateLayer)` - layer id already registered
    /// * `Err(SurfaceError::SourceNotFound)` - spec names an unknown source
    fn add_layer(&mut self, spec: LayerSpec) -> Result<(), SurfaceError>;

    /// Set a layer's visibility
    ///
    /// # Returns
    /// * `Err(SurfaceError::LayerNotFound)` - id not registered
    fn set_layer_visibility(&mut self, id: &str, visibility: Visibility)
        -> Result<(), SurfaceError>;

    /// Set the canvas cursor
    fn set_cursor(&mut self, cursor: Cursor);

    /// Start an animated camera move fitting `extent` into view
    fn fit_bounds(&mut self, extent: Extent, options: FitOptions) -> Result<(), SurfaceError>;
}
