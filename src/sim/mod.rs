//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per frame callback
//! - No rendering or platform dependencies
//! - Input handlers and the tick are the only mutators of game state

pub mod aim;
pub mod arrow;
pub mod state;
pub mod tick;

pub use aim::AimState;
pub use arrow::{Arrow, FlightOutcome};
pub use state::{GameEvent, GameState, Target};
pub use tick::tick;
