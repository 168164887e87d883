//! Longbow - a drag-and-release archery range game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (aim gesture, target motion, arrow flight, scoring)
//! - `renderer`: 2D scene drawing behind a small draw-surface trait
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical surface dimensions (no resize handling)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Bow anchor - fixed for the lifetime of the game
    pub const BOW_X: f32 = 150.0;
    pub const BOW_Y: f32 = 300.0;
    /// Radius of the bow's limb arc (rendering and bowstring endpoints)
    pub const BOW_LIMB_RADIUS: f32 = 40.0;

    /// Target geometry and motion
    pub const TARGET_X: f32 = 650.0;
    pub const TARGET_START_Y: f32 = 300.0;
    pub const TARGET_RADIUS: f32 = 60.0;
    pub const TARGET_SPEED: f32 = 2.0;
    pub const TARGET_Y_MIN: f32 = 100.0;
    pub const TARGET_Y_MAX: f32 = 500.0;

    /// Arrow ballistics, per tick (+y down), calibrated for ~60 Hz callbacks
    pub const GRAVITY_PER_TICK: f32 = 0.3;
    /// Draw distance to launch speed conversion
    pub const POWER_SCALE: f32 = 0.1;
    /// Launch speed cap, units per tick
    pub const MAX_POWER: f32 = 20.0;

    /// Radial width of one scoring ring band; points = floor(depth / band) + 1
    pub const SCORE_BAND: f32 = 12.0;
}
