//! Ghost Jump - a 2D platformer physics kernel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bounding boxes, collisions, jump, world state)
//! - `tuning`: Data-driven physics tuning
//! - `screen`: Outcome to screen table for the presentation layer

pub mod screen;
pub mod sim;
pub mod tuning;

pub use screen::{Screen, ScreenTable};
pub use tuning::Tuning;

/// Physics configuration constants
pub mod consts {
    /// Default simulation rate (240 Hz keeps per-tick moves tiny)
    pub const SIM_DT: f64 = 1.0 / 240.0;

    /// Downward acceleration applied every tick
    pub const GRAVITY: f64 = -15.0;
    /// Horizontal acceleration at full input deflection
    pub const RUN_ACCELERATION: f64 = 20.0;
    /// Horizontal speed clamp (both directions)
    pub const MAX_SPEED: f64 = 20.0;
    /// Flat deceleration toward zero horizontal speed
    pub const FRICTION: f64 = 12.0;
    /// Speed the body must exceed before facing flips
    pub const FACING_THRESHOLD: f64 = 0.1;
    /// Gap under the body that still counts as standing on a surface
    pub const GROUND_PROBE: f64 = 0.1;

    /// Time after a jump press during which ground contact still fires the jump
    pub const JUMP_LAG: f64 = 0.1;
    /// Time after the bounce during which upward thrust is applied
    pub const JUMP_DURATION: f64 = 0.1;
    /// Upward thrust during the jump window
    pub const JUMP_ACCELERATION: f64 = 100.0;

    /// Fixed number of halvings in the collision search (precision dt/64)
    pub const BISECTION_STEPS: u32 = 6;

    /// Sprite wobble amplitude (degrees)
    pub const WOBBLE_AMPLITUDE: f64 = 5.0;
    /// Sprite wobble period (seconds)
    pub const WOBBLE_PERIOD: f64 = 2.0;
}
