//! World and player state
//!
//! The world owns the single moving body, the static level and the input
//! accumulated between ticks. Presentation code may read it between ticks but
//! only mutates it through `accelerate`, `jump_start`/`jump_end` and `update`.

use std::f64::consts::TAU;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::bbox::BoundingBox;
use super::jump::Jump;
use super::level::Level;
use super::tick::{TickInput, tick};
use crate::consts::{WOBBLE_AMPLITUDE, WOBBLE_PERIOD};
use crate::tuning::Tuning;

/// Result of a tick, used by the presentation layer to pick a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Normal,
    Dead,
    Win,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Normal => "normal",
            Outcome::Dead => "dead",
            Outcome::Win => "win",
        }
    }

    /// Dead and Win end the session
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Normal)
    }
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    /// Sprite sheet column (left = 0, right = 1)
    pub fn as_index(&self) -> usize {
        match self {
            Facing::Left => 0,
            Facing::Right => 1,
        }
    }
}

/// Read-only view of the world for rendering and camera framing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub center: DVec2,
    pub size: DVec2,
    pub velocity: DVec2,
    pub facing: Facing,
    pub outcome: Outcome,
    /// Sprite wobble in degrees
    pub rotation: f64,
    /// Simulation clock (seconds)
    pub time: f64,
}

/// Complete simulation state for one play session
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) level: Level,
    pub(crate) tuning: Tuning,
    /// The player body ("ghost")
    pub(crate) body: BoundingBox,
    pub(crate) velocity: DVec2,
    /// Signed sum of digital +1/-1 input edges
    pub(crate) input_acc: f64,
    pub(crate) facing: Facing,
    pub(crate) dead: bool,
    pub(crate) won: bool,
    pub(crate) jump: Option<Jump>,
    /// Simulation clock, sum of all ticked dt
    pub(crate) time: f64,
    pub(crate) outcome: Outcome,
}

impl Default for World {
    fn default() -> Self {
        Self::new(Level::default_layout(), Tuning::default())
    }
}

impl World {
    /// Start a session with the player at the level's spawn box
    pub fn new(level: Level, tuning: Tuning) -> Self {
        Self {
            body: level.spawn,
            level,
            tuning,
            velocity: DVec2::ZERO,
            input_acc: 0.0,
            facing: Facing::Left,
            dead: false,
            won: false,
            jump: None,
            time: 0.0,
            outcome: Outcome::Normal,
        }
    }

    /// Apply a digital input edge: +1 on right press or left release,
    /// -1 on left press or right release
    pub fn accelerate(&mut self, direction: i32) {
        self.input_acc += direction.clamp(-1, 1) as f64;
    }

    /// Open a fresh jump session at the current simulation time
    pub fn jump_start(&mut self) {
        self.jump_start_at(self.time);
    }

    /// Open a fresh jump session pressed at `t`, discarding any previous one
    pub fn jump_start_at(&mut self, t: f64) {
        self.jump = Some(Jump::with_timing(t, self.tuning.jump));
    }

    /// Close the jump session whether or not it ever fired
    pub fn jump_end(&mut self) {
        self.jump = None;
    }

    /// Advance the simulation by `dt`
    ///
    /// `analog_x` is an absolute stick deflection in [-1, 1]; `None` uses the
    /// digital accumulator instead.
    pub fn update(&mut self, dt: f64, analog_x: Option<f64>) -> Outcome {
        tick(self, &TickInput { analog_x }, dt)
    }

    pub fn body(&self) -> BoundingBox {
        self.body
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn is_terminal(&self) -> bool {
        self.dead || self.won
    }

    pub fn jump(&self) -> Option<&Jump> {
        self.jump.as_ref()
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn input_accumulator(&self) -> f64 {
        self.input_acc
    }

    /// Decorative sprite wobble (degrees), driven by the simulation clock
    pub fn sprite_rotation(&self) -> f64 {
        let phase = self.time.rem_euclid(WOBBLE_PERIOD) / WOBBLE_PERIOD;
        WOBBLE_AMPLITUDE * (phase * TAU).sin()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            center: self.body.center(),
            size: self.body.size(),
            velocity: self.velocity,
            facing: self.facing,
            outcome: self.outcome,
            rotation: self.sprite_rotation(),
            time: self.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_starts_at_spawn() {
        let world = World::default();
        assert_eq!(world.body(), world.level().spawn);
        assert_eq!(world.velocity(), DVec2::ZERO);
        assert_eq!(world.outcome(), Outcome::Normal);
        assert_eq!(world.facing(), Facing::Left);
        assert!(world.jump().is_none());
    }

    #[test]
    fn test_accelerate_edges_cancel() {
        let mut world = World::default();
        world.accelerate(1);
        world.accelerate(-1);
        assert_eq!(world.input_accumulator(), 0.0);
        world.accelerate(-1);
        assert_eq!(world.input_accumulator(), -1.0);
        world.accelerate(5);
        assert_eq!(world.input_accumulator(), 0.0);
    }

    #[test]
    fn test_jump_press_replaces_session() {
        let mut world = World::default();
        world.jump_start_at(1.0);
        world.jump_start_at(2.0);
        assert_eq!(world.jump().map(|j| j.press_time()), Some(2.0));
        world.jump_end();
        assert!(world.jump().is_none());
    }

    #[test]
    fn test_sprite_rotation_wobbles() {
        let mut world = World::default();
        assert!(world.sprite_rotation().abs() < 1e-12);
        world.time = 0.5;
        assert!((world.sprite_rotation() - WOBBLE_AMPLITUDE).abs() < 1e-12);
        world.time = 2.5;
        assert!((world.sprite_rotation() - WOBBLE_AMPLITUDE).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_serializes() {
        let world = World::default();
        let json = serde_json::to_string(&world.snapshot()).unwrap();
        assert!(json.contains("\"outcome\":\"normal\""));
        assert!(json.contains("\"facing\":\"left\""));
    }

    #[test]
    fn test_facing_index() {
        assert_eq!(Facing::Left.as_index(), 0);
        assert_eq!(Facing::Right.as_index(), 1);
    }
}
