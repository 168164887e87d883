//! Game state and core simulation types
//!
//! One mutable record owned by the frame driver. Pointer handlers and
//! [`tick`](super::tick::tick) are the only mutators.

use glam::Vec2;

use super::aim::AimState;
use super::arrow::Arrow;
use crate::consts::*;
use crate::tuning::Tuning;

/// The oscillating ring target
///
/// `x` is fixed; `y` reflects between `y_min` and `y_max`. The direction flip
/// happens on the tick after a bound is crossed, so `y` may overshoot by at
/// most one tick's worth of speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    /// Always -1.0 or +1.0
    pub direction: f32,
}

impl Target {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: TARGET_X,
            y: TARGET_START_Y,
            radius: TARGET_RADIUS,
            speed: tuning.target_speed,
            direction: 1.0,
        }
    }

    /// Advance one tick of vertical oscillation. Called exactly once per tick.
    pub fn advance(&mut self, tuning: &Tuning) {
        self.y += self.direction * self.speed;
        if self.y > tuning.target_y_max || self.y < tuning.target_y_min {
            self.direction = -self.direction;
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Events produced by a tick, consumed by the score sink and the log
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The arrow landed inside the target
    TargetHit {
        points: u32,
        total: u32,
        /// Distance from the target center at impact
        distance: f32,
    },
    /// The arrow left the surface without scoring
    ArrowLost,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Cumulative score, only ever grows
    pub score: u32,
    /// Current aim gesture
    pub aim: AimState,
    /// Bow anchor, immutable after construction
    pub bow: Vec2,
    pub target: Target,
    /// The single in-flight arrow, if any
    pub arrow: Option<Arrow>,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub ticks: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            score: 0,
            aim: AimState::new(),
            bow: Vec2::new(BOW_X, BOW_Y),
            target: Target::new(&tuning),
            arrow: None,
            tuning,
            ticks: 0,
        }
    }

    /// Pointer pressed: begin a draw at `point`
    pub fn pointer_down(&mut self, point: Vec2) {
        self.aim.pointer_down(point);
    }

    /// Pointer moved: track the draw point while drawing
    pub fn pointer_move(&mut self, point: Vec2) {
        self.aim.pointer_move(point);
    }

    /// Pointer released: launch toward the release point.
    ///
    /// A release while an arrow is already in flight is ignored, as is a
    /// release exactly on the bow anchor (zero-length draw). Returns whether
    /// an arrow was launched.
    pub fn pointer_up(&mut self, point: Vec2) -> bool {
        let Some(release) = self.aim.pointer_up(point) else {
            return false;
        };
        if self.arrow.is_some() {
            return false;
        }
        match Arrow::launch(self.bow, release, &self.tuning) {
            Some(arrow) => {
                self.arrow = Some(arrow);
                true
            }
            None => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_reflects_at_lower_bound() {
        let tuning = Tuning::default();
        let mut target = Target::new(&tuning);
        target.y = TARGET_Y_MIN + 1.0;
        target.direction = -1.0;

        // First tick crosses the bound, flip happens after the move
        target.advance(&tuning);
        assert_eq!(target.y, TARGET_Y_MIN - 1.0);
        assert_eq!(target.direction, 1.0);

        target.advance(&tuning);
        assert_eq!(target.y, TARGET_Y_MIN + 1.0);
    }

    #[test]
    fn target_reflects_at_upper_bound() {
        let tuning = Tuning::default();
        let mut target = Target::new(&tuning);
        target.y = TARGET_Y_MAX - 1.0;
        target.direction = 1.0;

        target.advance(&tuning);
        assert_eq!(target.y, TARGET_Y_MAX + 1.0);
        assert_eq!(target.direction, -1.0);
    }

    #[test]
    fn target_overshoot_bounded_by_one_tick() {
        let tuning = Tuning::default();
        let mut target = Target::new(&tuning);
        for _ in 0..10_000 {
            target.advance(&tuning);
            assert!(target.y >= TARGET_Y_MIN - target.speed);
            assert!(target.y <= TARGET_Y_MAX + target.speed);
            assert!(target.direction == 1.0 || target.direction == -1.0);
        }
    }

    #[test]
    fn release_without_draw_is_ignored() {
        let mut state = GameState::new();
        assert!(!state.pointer_up(Vec2::new(100.0, 100.0)));
        assert!(state.arrow.is_none());
    }

    #[test]
    fn launch_while_in_flight_is_ignored() {
        let mut state = GameState::new();
        state.pointer_down(Vec2::new(100.0, 350.0));
        assert!(state.pointer_up(Vec2::new(100.0, 350.0)));
        let first = state.arrow.expect("arrow launched");

        state.pointer_down(Vec2::new(50.0, 400.0));
        assert!(!state.pointer_up(Vec2::new(50.0, 400.0)));
        let kept = state.arrow.expect("arrow still present");
        assert_eq!(kept.vel, first.vel);
        assert_eq!(kept.pos, first.pos);
    }

    #[test]
    fn zero_length_draw_launches_nothing() {
        let mut state = GameState::new();
        let bow = state.bow;
        state.pointer_down(bow);
        assert!(!state.pointer_up(bow));
        assert!(state.arrow.is_none());
        assert!(!state.aim.drawing);
    }
}
