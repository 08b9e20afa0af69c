//! Gesture router state machine

use pinmap_geo::LngLatDelta;

use super::DragState;

/// Owns the drag state for the single allowed gesture
///
/// `None` is the idle state. Only one gesture can hold the region at a
/// time; arming while a gesture is active is refused, which is what
/// makes a re-entrant pointer-down during a drag a structural no-op.
#[derive(Debug, Default)]
pub struct GestureRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl GestureRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a gesture is active (armed or dragging)
    #[inline]
    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Arm a gesture, capturing the drag offset
    ///
    /// Returns false (and changes nothing) if a gesture is already
    /// active.
    pub fn arm(&mut self, offset: LngLatDelta) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragState::Armed { offset });
        true
    }

    /// Transition an armed gesture to dragging, keeping its offset
    ///
    /// Returns the offset when a gesture is active, in either state.
    pub fn begin_move(&mut self) -> Option<LngLatDelta> {
        let offset = self.drag.as_ref()?.offset();
        self.drag = Some(DragState::Dragging { offset });
        Some(offset)
    }

    /// End the gesture, releasing its offset
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }
}
