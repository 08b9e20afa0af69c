//! Drag state for an active gesture

use pinmap_geo::LngLatDelta;

/// State of the gesture currently holding the region
///
/// The offset is the vector from the region center to the initial
/// contact point, captured exactly once when the gesture arms. It stays
/// fixed for the whole gesture so the region tracks the pointer without
/// jumping its center to the contact point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    /// Pointer is down on the region; no movement yet
    Armed {
        /// Contact point minus region center
        offset: LngLatDelta,
    },
    /// Pointer is moving with the region attached
    Dragging {
        /// Contact point minus region center, unchanged since arming
        offset: LngLatDelta,
    },
}

impl DragState {
    /// Check if the gesture has not moved yet
    #[inline]
    pub fn is_armed(&self) -> bool {
        matches!(self, DragState::Armed { .. })
    }

    /// Check if the gesture is actively moving
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// The offset captured when the gesture armed
    #[inline]
    pub fn offset(&self) -> LngLatDelta {
        match self {
            DragState::Armed { offset } => *offset,
            DragState::Dragging { offset } => *offset,
        }
    }
}
