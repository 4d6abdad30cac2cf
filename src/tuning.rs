//! Physics tuning
//!
//! Data-driven values for movement feel. Missing fields fall back to the
//! defaults in [`crate::consts`], so a tuning file only needs the knobs it
//! changes.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::JumpTiming;

/// Movement and jump parameters for the player body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Vertical ===
    /// Downward acceleration (negative is down)
    pub gravity: f64,

    // === Horizontal ===
    /// Acceleration at full input deflection
    pub run_acceleration: f64,
    /// Horizontal speed clamp
    pub max_speed: f64,
    /// Flat deceleration toward zero
    pub friction: f64,
    /// Speed needed to flip facing direction
    pub facing_threshold: f64,

    // === Contacts ===
    /// Gap under the body that counts as ground contact for jumping
    pub ground_probe: f64,
    /// Velocity kept (reflected) on the blocked axis after a hit
    pub bounciness: f64,

    // === Jump ===
    pub jump: JumpTiming,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,

            run_acceleration: RUN_ACCELERATION,
            max_speed: MAX_SPEED,
            friction: FRICTION,
            facing_threshold: FACING_THRESHOLD,

            ground_probe: GROUND_PROBE,
            bounciness: 0.0,

            jump: JumpTiming::default(),
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Bounciness clamped to the meaningful range
    pub fn effective_bounciness(&self) -> f64 {
        self.bounciness.clamp(0.0, 1.0)
    }
}
