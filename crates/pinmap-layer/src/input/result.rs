//! Input result type

use serde::Serialize;

/// Result of handling a pointer or touch event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Event was consumed by the region gesture machine
    Handled,
    /// Event did not apply (pass through to the rest of the map)
    Unhandled,
}

impl InputResult {
    /// Check if the event was consumed
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}
