//! Pointer and touch event handling

use pinmap_geo::LngLat;
use pinmap_surface::{Cursor, RenderSurface};

use crate::input::InputResult;

use super::ServiceAreaEngine;

impl<S: RenderSurface> ServiceAreaEngine<S> {
    /// Handle pointer down at a geographic position
    ///
    /// Arms a drag gesture when the position hits the visible region.
    /// No region, a hidden layer, a miss, or a gesture already in
    /// flight all leave the machine untouched.
    pub fn handle_pointer_down(&mut self, pos: LngLat) -> InputResult {
        if self.layer_state.is_hidden() {
            return InputResult::Unhandled;
        }
        let center = match &self.circle {
            Some(circle) if circle.contains(pos) => circle.center(),
            _ => return InputResult::Unhandled,
        };

        if !self.input.arm(pos - center) {
            // Second contact while a gesture holds the region
            return InputResult::Unhandled;
        }

        self.surface.set_cursor(Cursor::Grab);
        InputResult::Handled
    }

    /// Handle pointer move at a geographic position
    ///
    /// While a gesture is active this translates the region: the new
    /// center is the pointer position minus the offset captured at arm
    /// time, and both geometries are recomputed and pushed before
    /// returning. When idle it only tracks hover for cursor feedback.
    pub fn handle_pointer_move(&mut self, pos: LngLat) -> InputResult {
        let offset = match self.input.begin_move() {
            Some(offset) => offset,
            None => return self.update_hover(pos),
        };

        self.move_region_to(pos - offset);
        self.surface.set_cursor(Cursor::Grabbing);
        InputResult::Handled
    }

    /// Handle pointer up at a geographic position
    ///
    /// Computes the final center exactly like a move, pushes it, then
    /// reports the committed region through the drag-end callback and
    /// releases the gesture. With the gesture released, further moves
    /// fall through to hover handling; nothing is left listening.
    pub fn handle_pointer_up(&mut self, pos: LngLat) -> InputResult {
        let state = match self.input.end_drag() {
            Some(state) => state,
            None => return InputResult::Unhandled,
        };

        self.move_region_to(pos - state.offset());
        self.surface.set_cursor(Cursor::Default);
        self.hovering = false;

        let region = self.region();
        if let (Some(handler), Some(region)) = (self.on_drag_end.as_mut(), region) {
            handler(region);
        }

        InputResult::Handled
    }

    /// Handle touch start with the gesture's contact points
    ///
    /// Anything other than exactly one contact point is rejected with
    /// no transition.
    pub fn handle_touch_start(&mut self, points: &[LngLat]) -> InputResult {
        match points {
            [point] => self.handle_pointer_down(*point),
            _ => InputResult::Unhandled,
        }
    }

    /// Handle touch move with the gesture's contact points
    pub fn handle_touch_move(&mut self, points: &[LngLat]) -> InputResult {
        match points {
            [point] => self.handle_pointer_move(*point),
            _ => InputResult::Unhandled,
        }
    }

    /// Handle touch end at the final contact position
    pub fn handle_touch_end(&mut self, pos: LngLat) -> InputResult {
        self.handle_pointer_up(pos)
    }

    /// Track whether the idle pointer is over the region, updating the
    /// cursor on enter and leave
    fn update_hover(&mut self, pos: LngLat) -> InputResult {
        let over = !self.layer_state.is_hidden()
            && self.circle.as_ref().is_some_and(|c| c.contains(pos));

        if over != self.hovering {
            self.hovering = over;
            self.surface
                .set_cursor(if over { Cursor::Move } else { Cursor::Default });
        }

        InputResult::Unhandled
    }
}
