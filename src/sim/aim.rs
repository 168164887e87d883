//! Aim gesture tracking
//!
//! The pointer down-move-up sequence that draws the bowstring. Handlers run
//! to completion as events arrive; only the release feeds back into the
//! simulation (as a launch request handled by `GameState::pointer_up`).

use glam::Vec2;

/// State of the current aim gesture
///
/// `draw_point` holds the last pointer position seen while drawing. It is
/// deliberately not cleared on release - stale when `drawing` is false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimState {
    pub drawing: bool,
    pub draw_point: Vec2,
}

impl AimState {
    pub fn new() -> Self {
        Self {
            drawing: false,
            draw_point: Vec2::ZERO,
        }
    }

    /// Begin a draw. Coordinates are surface-local but never clamped;
    /// points outside the surface only affect launch power and direction.
    pub fn pointer_down(&mut self, point: Vec2) {
        self.draw_point = point;
        self.drawing = true;
    }

    /// Track the pointer while drawing; no-op otherwise.
    pub fn pointer_move(&mut self, point: Vec2) {
        if self.drawing {
            self.draw_point = point;
        }
    }

    /// End the gesture. Returns the release point if a draw was in progress.
    /// Always leaves the drawing flag cleared, whatever the prior state.
    pub fn pointer_up(&mut self, point: Vec2) -> Option<Vec2> {
        let was_drawing = self.drawing;
        self.drawing = false;
        was_drawing.then_some(point)
    }
}

impl Default for AimState {
    fn default() -> Self {
        Self::new()
    }
}
