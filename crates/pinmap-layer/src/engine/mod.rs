//! Service-area engine coordinating geometry, gestures, and the surface
//!
//! This module is split into focused submodules:
//! - `layers`: source/layer installation, visibility, geometry pushes
//! - `input`: pointer and touch event handling
//! - `camera`: programmatic recenter, radius updates, settle callbacks

mod camera;
mod input;
mod layers;

use serde::Serialize;

use pinmap_geo::{Circle, DistanceUnit, LngLat};
use pinmap_surface::{RenderSurface, SurfaceError};

use crate::config::LayerConfig;
use crate::input::GestureRouter;
use crate::region::RegionResult;

/// Callback invoked once per completed drag gesture
pub type DragEndHandler = Box<dyn FnMut(RegionResult)>;

/// Queued continuation waiting for the camera to settle
pub(crate) type SettleContinuation = Box<dyn FnOnce()>;

/// Visibility of the whole layer group
///
/// Independent of the drag state: a gesture never changes it, and it
/// persists across gestures until toggled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerState {
    /// Layers are shown
    #[default]
    Visible,
    /// Layers are hidden and their sources cleared
    Hidden,
}

impl LayerState {
    /// Check if the layer group is hidden
    #[inline]
    pub fn is_hidden(&self) -> bool {
        matches!(self, LayerState::Hidden)
    }
}

/// Draggable service-area layer engine
///
/// This is the entry point for region operations, owning:
/// - The render surface the sources and layers live on
/// - The committed region geometry (a derived, replaceable snapshot)
/// - The gesture router (single-gesture drag state machine)
/// - Queued camera-settle continuations
///
/// The embedding forwards the renderer's pointer, touch, and
/// camera-idle events to the `handle_*` methods; everything else
/// happens synchronously inside them.
pub struct ServiceAreaEngine<S: RenderSurface> {
    /// Render surface the layer draws on
    pub surface: S,
    /// Gesture router
    pub input: GestureRouter,
    /// Layer configuration (ids, paint, defaults)
    pub(crate) config: LayerConfig,
    /// Committed region geometry; `None` until a center is set
    pub(crate) circle: Option<Circle>,
    /// Radius for the next recompute
    pub(crate) radius: f64,
    /// Unit of `radius`
    pub(crate) unit: DistanceUnit,
    /// Layer group visibility
    pub(crate) layer_state: LayerState,
    /// Whether the idle pointer is currently over the region
    pub(crate) hovering: bool,
    /// Drag completion callback
    pub(crate) on_drag_end: Option<DragEndHandler>,
    /// Continuations waiting for the next camera settle
    pub(crate) settle_queue: Vec<SettleContinuation>,
}

impl<S: RenderSurface> ServiceAreaEngine<S> {
    /// Create the engine and install its sources and layers on the
    /// surface
    ///
    /// Installation failures are integration errors (duplicate ids,
    /// unknown sources) and propagate; once installed, runtime pushes
    /// degrade to no-ops if the surface loses a source.
    pub fn new(surface: S, config: LayerConfig) -> Result<Self, SurfaceError> {
        let mut engine = Self {
            surface,
            input: GestureRouter::new(),
            radius: config.radius,
            unit: config.unit,
            config,
            circle: None,
            layer_state: LayerState::Visible,
            hovering: false,
            on_drag_end: None,
            settle_queue: Vec::new(),
        };
        engine.install()?;
        Ok(engine)
    }

    /// Register the drag completion callback, replacing any previous one
    pub fn set_on_drag_end(&mut self, handler: impl FnMut(RegionResult) + 'static) {
        self.on_drag_end = Some(Box::new(handler));
    }

    /// Current committed center, if one is set
    #[inline]
    pub fn center(&self) -> Option<LngLat> {
        self.circle.as_ref().map(|c| c.center())
    }

    /// Radius the next recompute will use
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Current layer group visibility
    #[inline]
    pub fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    /// Current committed region, if a center is set
    pub fn region(&self) -> Option<RegionResult> {
        self.circle.as_ref().map(|circle| RegionResult {
            geometry: circle.clone(),
            center: circle.center(),
        })
    }
}
