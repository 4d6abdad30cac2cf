//! Jump buffering
//!
//! A jump session is opened on press and closed on release. Pressing shortly
//! before landing still counts: once the body touches ground within the lag
//! window the session bounces, and upward thrust is granted for a fixed
//! duration after the bounce.

use serde::{Deserialize, Serialize};

use crate::consts::{JUMP_ACCELERATION, JUMP_DURATION, JUMP_LAG};

/// Timing windows and thrust of a jump
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpTiming {
    /// Max time between press and ground contact (exclusive)
    pub lag: f64,
    /// Thrust window after the bounce (inclusive)
    pub duration: f64,
    /// Upward acceleration during the thrust window
    pub acceleration: f64,
}

impl Default for JumpTiming {
    fn default() -> Self {
        Self {
            lag: JUMP_LAG,
            duration: JUMP_DURATION,
            acceleration: JUMP_ACCELERATION,
        }
    }
}

/// One press-release jump session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jump {
    press_time: f64,
    bounce_time: Option<f64>,
    timing: JumpTiming,
}

impl Jump {
    /// Open a session pressed at `t` with default timing
    pub fn new(t: f64) -> Self {
        Self::with_timing(t, JumpTiming::default())
    }

    pub fn with_timing(t: f64, timing: JumpTiming) -> Self {
        Self {
            press_time: t,
            bounce_time: None,
            timing,
        }
    }

    pub fn press_time(&self) -> f64 {
        self.press_time
    }

    pub fn bounce_time(&self) -> Option<f64> {
        self.bounce_time
    }

    pub fn bounced(&self) -> bool {
        self.bounce_time.is_some()
    }

    /// Record ground contact at `t`
    ///
    /// Only the first contact inside the lag window counts. Later calls are
    /// no-ops.
    pub fn bounce(&mut self, t: f64) {
        if self.bounce_time.is_none() && t - self.press_time < self.timing.lag {
            self.bounce_time = Some(t);
        }
    }

    /// Upward acceleration granted at `t`
    pub fn vert_acc(&self, t: f64) -> f64 {
        match self.bounce_time {
            Some(bounce) if t - bounce <= self.timing.duration => self.timing.acceleration,
            _ => 0.0,
        }
    }
}
