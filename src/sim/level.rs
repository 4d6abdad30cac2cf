//! World layout: obstacles, goal and kill bounds
//!
//! A level is built once at session start and never changes during play.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bbox::BoundingBox;

/// Errors raised while loading a level description
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to parse level: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {what} box (index {index:?})")]
    InvalidBox {
        what: &'static str,
        index: Option<usize>,
    },
    #[error("spawn box {spawn} is outside level bounds {bounds}")]
    SpawnOutOfBounds {
        spawn: BoundingBox,
        bounds: BoundingBox,
    },
}

/// Static description of a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Starting box of the player
    pub spawn: BoundingBox,
    /// Static obstacles, scanned in this order by the resolver
    pub obstacles: Vec<BoundingBox>,
    /// Swallowing the player whole wins the level
    pub goal: BoundingBox,
    /// Leaving this box kills the player
    pub bounds: BoundingBox,
}

impl Default for Level {
    fn default() -> Self {
        Self::default_layout()
    }
}

impl Level {
    /// Two floor pieces with a pit between them, a couple of steps and a
    /// staggered field of floating blocks leading to the goal
    pub fn default_layout() -> Self {
        let mut obstacles = vec![
            BoundingBox::new(-100.0, -100.0, 7.0, 0.0),
            BoundingBox::new(9.0, -100.0, 100.0, 0.0),
            BoundingBox::new(2.0, 0.0, 3.0, 1.0),
            BoundingBox::new(4.0, 0.0, 6.0, 2.0),
        ];
        for x in 0..10 {
            for y in 0..3 {
                let min = DVec2::new(2.5 * x as f64 + (y % 2) as f64 + 12.0, 2.5 * y as f64 + 1.0);
                obstacles.push(BoundingBox::from_min_size(min, DVec2::ONE));
            }
        }

        Self {
            spawn: BoundingBox::new(0.0, 0.0, 0.8, 0.8),
            obstacles,
            goal: BoundingBox::new(40.0, 2.0, 42.0, 4.0),
            bounds: BoundingBox::new(-100.0, -100.0, 100.0, 100.0),
        }
    }

    /// Parse and validate a JSON level description
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every box is well formed and the player starts alive
    pub fn validate(&self) -> Result<(), LevelError> {
        let single = [
            ("spawn", &self.spawn),
            ("goal", &self.goal),
            ("bounds", &self.bounds),
        ];
        for (what, bbox) in single {
            if !bbox.is_valid() {
                return Err(LevelError::InvalidBox { what, index: None });
            }
        }
        if let Some(index) = self.obstacles.iter().position(|b| !b.is_valid()) {
            return Err(LevelError::InvalidBox {
                what: "obstacle",
                index: Some(index),
            });
        }
        if !self.bounds.contains(&self.spawn) {
            return Err(LevelError::SpawnOutOfBounds {
                spawn: self.spawn,
                bounds: self.bounds,
            });
        }
        Ok(())
    }
}
