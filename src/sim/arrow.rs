//! Arrow flight: launch, ballistic integration, collision and scoring
//!
//! The densest part of the simulation. One arrow at most is ever in flight;
//! a tick either keeps it flying, lands it on the target, or culls it
//! off-screen. Collision is checked before the off-screen rule.

use glam::Vec2;

use super::state::Target;
use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::tuning::Tuning;

/// A launched arrow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Result of advancing an arrow by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightOutcome {
    InFlight,
    /// Landed inside the target
    Hit { points: u32, distance: f32 },
    /// Left the surface (or became non-finite) without scoring
    OffScreen,
}

impl Arrow {
    /// Build an arrow from a release gesture.
    ///
    /// Power grows with the draw distance up to `max_power`; the velocity
    /// points from the bow toward the release point. A release exactly on
    /// the bow anchor has no direction and launches nothing.
    pub fn launch(bow: Vec2, release: Vec2, tuning: &Tuning) -> Option<Self> {
        let dist = bow.distance(release);
        if dist <= f32::EPSILON {
            return None;
        }
        let power = (dist * tuning.power_scale).min(tuning.max_power);
        let vel = (release - bow) / dist * power;
        Some(Self { pos: bow, vel })
    }

    /// Advance one tick: integrate, then resolve against the target and the
    /// surface bounds. Collision wins when both would trigger on the same
    /// tick.
    pub fn advance(&mut self, target: &Target, tuning: &Tuning) -> FlightOutcome {
        self.pos += self.vel;
        self.vel.y += tuning.gravity;

        let distance = self.pos.distance(target.center());
        if distance < target.radius {
            return FlightOutcome::Hit {
                points: score_for_hit(distance, target.radius, tuning),
                distance,
            };
        }

        // No y < 0 test: arrows above the top edge stay in flight until they
        // fall back down or drift out sideways.
        let off = self.pos.x > SURFACE_WIDTH || self.pos.x < 0.0 || self.pos.y > SURFACE_HEIGHT;
        if off || !self.pos.is_finite() {
            return FlightOutcome::OffScreen;
        }

        FlightOutcome::InFlight
    }
}

/// Points for a hit at `distance` from the center of a target with `radius`.
///
/// Continuous in the penetration depth, one point per full scoring band,
/// minimum 1 at the rim.
pub fn score_for_hit(distance: f32, radius: f32, tuning: &Tuning) -> u32 {
    ((radius - distance) / tuning.score_band).floor() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{TARGET_RADIUS, TARGET_X};

    fn still_target(x: f32, y: f32, radius: f32) -> Target {
        Target {
            x,
            y,
            radius,
            speed: 0.0,
            direction: 1.0,
        }
    }

    #[test]
    fn launch_velocity_matches_reference_vector() {
        let tuning = Tuning::default();
        let bow = Vec2::new(150.0, 300.0);
        let release = Vec2::new(130.0, 320.0);

        let arrow = Arrow::launch(bow, release, &tuning).expect("launches");
        assert_eq!(arrow.pos, bow);
        // dist = sqrt(20^2 + 20^2) = 28.28..., power = 2.828...
        assert!((arrow.vel.x - (-2.0)).abs() < 1e-4);
        assert!((arrow.vel.y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn launch_power_is_capped() {
        let tuning = Tuning::default();
        let bow = Vec2::new(150.0, 300.0);
        // A 400-unit draw would mean power 40 without the cap
        let release = Vec2::new(150.0 - 400.0, 300.0);

        let arrow = Arrow::launch(bow, release, &tuning).expect("launches");
        assert!((arrow.vel.length() - tuning.max_power).abs() < 1e-4);
        assert!(arrow.vel.x < 0.0);
    }

    #[test]
    fn zero_distance_release_is_a_no_launch() {
        let tuning = Tuning::default();
        let bow = Vec2::new(150.0, 300.0);
        assert_eq!(Arrow::launch(bow, bow, &tuning), None);
    }

    #[test]
    fn scoring_formula_exact_values() {
        let tuning = Tuning::default();
        assert_eq!(score_for_hit(0.0, 60.0, &tuning), 6);
        assert_eq!(score_for_hit(59.0, 60.0, &tuning), 1);
        assert_eq!(score_for_hit(48.0, 60.0, &tuning), 2);
    }

    #[test]
    fn advance_applies_gravity_after_move() {
        let tuning = Tuning::default();
        let target = still_target(TARGET_X, 300.0, TARGET_RADIUS);
        let mut arrow = Arrow {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(1.0, 0.0),
        };

        assert_eq!(arrow.advance(&target, &tuning), FlightOutcome::InFlight);
        // Position moved with the pre-gravity velocity
        assert_eq!(arrow.pos, Vec2::new(101.0, 100.0));
        assert!((arrow.vel.y - tuning.gravity).abs() < 1e-6);
    }

    #[test]
    fn hit_inside_target_scores() {
        let tuning = Tuning::default();
        let target = still_target(400.0, 300.0, 60.0);
        let mut arrow = Arrow {
            pos: Vec2::new(398.0, 300.0),
            vel: Vec2::new(2.0, 0.0),
        };

        // Moves onto the exact center
        match arrow.advance(&target, &tuning) {
            FlightOutcome::Hit { points, distance } => {
                assert_eq!(points, 6);
                assert!(distance < 1e-4);
            }
            other => panic!("expected hit, got {other:?}"),
        }
    }

    #[test]
    fn arrow_above_the_top_edge_is_not_culled() {
        let tuning = Tuning::default();
        let target = still_target(TARGET_X, 300.0, TARGET_RADIUS);
        let mut arrow = Arrow {
            pos: Vec2::new(400.0, -50.0),
            vel: Vec2::new(0.0, -5.0),
        };

        // Climbs further above the surface and stays in flight
        assert_eq!(arrow.advance(&target, &tuning), FlightOutcome::InFlight);
        assert!(arrow.pos.y < 0.0);
    }

    #[test]
    fn arrow_is_culled_past_each_other_edge() {
        let tuning = Tuning::default();
        let target = still_target(TARGET_X, 100.0, TARGET_RADIUS);

        let mut right = Arrow {
            pos: Vec2::new(799.0, 400.0),
            vel: Vec2::new(5.0, 0.0),
        };
        assert_eq!(right.advance(&target, &tuning), FlightOutcome::OffScreen);

        let mut left = Arrow {
            pos: Vec2::new(1.0, 400.0),
            vel: Vec2::new(-5.0, 0.0),
        };
        assert_eq!(left.advance(&target, &tuning), FlightOutcome::OffScreen);

        let mut bottom = Arrow {
            pos: Vec2::new(400.0, 599.0),
            vel: Vec2::new(0.0, 5.0),
        };
        assert_eq!(bottom.advance(&target, &tuning), FlightOutcome::OffScreen);
    }

    #[test]
    fn collision_takes_priority_over_culling() {
        let tuning = Tuning::default();
        // Target hugging the right edge so one step can be both inside the
        // target and past x = SURFACE_WIDTH
        let target = still_target(790.0, 300.0, 60.0);
        let mut arrow = Arrow {
            pos: Vec2::new(791.0, 300.0),
            vel: Vec2::new(10.0, 0.0),
        };

        match arrow.advance(&target, &tuning) {
            FlightOutcome::Hit { .. } => {}
            other => panic!("collision must win, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_position_is_culled() {
        let tuning = Tuning::default();
        let target = still_target(TARGET_X, 300.0, TARGET_RADIUS);
        let mut arrow = Arrow {
            pos: Vec2::new(f32::NAN, 300.0),
            vel: Vec2::ZERO,
        };
        assert_eq!(arrow.advance(&target, &tuning), FlightOutcome::OffScreen);
    }
}
