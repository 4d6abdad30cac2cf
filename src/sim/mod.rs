//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and deterministic:
//! - Time is always an explicit parameter (no wall clock)
//! - Obstacles are scanned in their stored order
//! - No rendering or platform dependencies

pub mod bbox;
pub mod collision;
pub mod jump;
pub mod level;
pub mod state;
pub mod tick;

pub use bbox::BoundingBox;
pub use collision::{Motion, move_and_collide, move_till_first_collision};
pub use jump::{Jump, JumpTiming};
pub use level::{Level, LevelError};
pub use state::{Facing, Outcome, Snapshot, World};
pub use tick::{TickInput, tick};
