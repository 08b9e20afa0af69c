//! Draggable service-area layer engine for the pin map
//!
//! Lets a user position a circular catchment region by dragging it on
//! the map. The engine owns the gesture state machine and the committed
//! region geometry; pure geometry lives in `pinmap-geo`, and the map
//! renderer is reached only through the `pinmap-surface` trait.
//!
//! Event flow: the embedding forwards renderer pointer/touch events to
//! [`ServiceAreaEngine::handle_pointer_down`] and friends; each move
//! recomputes the circle and its dimming mask and pushes both to the
//! surface before returning; when the gesture ends the drag-end
//! callback reports the final [`RegionResult`]. Programmatic recenters
//! ([`ServiceAreaEngine::set_center`]) additionally fit the camera to
//! the region and resolve their continuation when the embedding reports
//! the camera idle.

mod config;
mod engine;
pub mod input;
mod region;

pub use config::LayerConfig;
pub use engine::{DragEndHandler, LayerState, ServiceAreaEngine};
pub use input::{DragState, GestureRouter, InputResult};
pub use region::RegionResult;
