//! Gesture state machine for dragging the service area

mod drag;
mod result;
mod router;

pub use drag::DragState;
pub use result::InputResult;
pub use router::GestureRouter;
