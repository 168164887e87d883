//! Per-frame simulation step
//!
//! The frame driver calls [`tick`] exactly once per animation-frame callback,
//! then renders. All motion constants are per-tick values; there is no
//! delta-time and no catch-up for late frames.

use super::arrow::FlightOutcome;
use super::state::{GameEvent, GameState};

/// Advance the whole simulation by one tick.
///
/// Order is fixed: target motion first, then arrow flight, so collision is
/// always resolved against the target's post-move position. Terminal arrow
/// outcomes clear the arrow in the same tick.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    state.ticks += 1;

    let tuning = state.tuning;
    state.target.advance(&tuning);

    let mut events = Vec::new();
    if let Some(arrow) = state.arrow.as_mut() {
        match arrow.advance(&state.target, &tuning) {
            FlightOutcome::InFlight => {}
            FlightOutcome::Hit { points, distance } => {
                state.score += points;
                events.push(GameEvent::TargetHit {
                    points,
                    total: state.score,
                    distance,
                });
                state.arrow = None;
            }
            FlightOutcome::OffScreen => {
                events.push(GameEvent::ArrowLost);
                state.arrow = None;
            }
        }
    }
    events
}
