//! Data-driven game balance
//!
//! Every physics and motion knob in one serde-backed struct so balance
//! tweaks don't touch simulation code. Defaults are the reference values
//! the scoring and flight tests are written against.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs, all per-tick quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Target vertical speed
    pub target_speed: f32,
    /// Reflecting bounds for the target's center
    pub target_y_min: f32,
    pub target_y_max: f32,
    /// Downward acceleration applied to the arrow each tick
    pub gravity: f32,
    /// Draw distance to launch speed conversion
    pub power_scale: f32,
    /// Launch speed cap
    pub max_power: f32,
    /// Radial width of one scoring band
    pub score_band: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            target_speed: TARGET_SPEED,
            target_y_min: TARGET_Y_MIN,
            target_y_max: TARGET_Y_MAX,
            gravity: GRAVITY_PER_TICK,
            power_scale: POWER_SCALE,
            max_power: MAX_POWER,
            score_band: SCORE_BAND,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let t = Tuning::default();
        assert_eq!(t.target_speed, 2.0);
        assert_eq!(t.target_y_min, 100.0);
        assert_eq!(t.target_y_max, 500.0);
        assert_eq!(t.gravity, 0.3);
        assert_eq!(t.power_scale, 0.1);
        assert_eq!(t.max_power, 20.0);
        assert_eq!(t.score_band, 12.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.5 }"#).expect("parses");
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.max_power, 20.0);
    }

    #[test]
    fn json_round_trip() {
        let t = Tuning {
            target_speed: 3.5,
            ..Tuning::default()
        };
        let json = t.to_json().expect("serializes");
        assert_eq!(Tuning::from_json(&json).expect("parses"), t);
    }
}
