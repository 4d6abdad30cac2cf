//! Simulation tick
//!
//! Integrates input, friction, gravity and jump thrust, resolves collisions
//! and derives the session outcome.

use glam::DVec2;

use super::bbox::BoundingBox;
use super::collision::move_and_collide;
use super::state::{Facing, Outcome, World};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Absolute stick deflection in [-1, 1] (None = digital accumulator)
    pub analog_x: Option<f64>,
}

/// Body rests on some obstacle: overlapping it horizontally with its bottom
/// edge less than `probe` above the obstacle's top
fn touches_ground(body: &BoundingBox, obstacles: &[BoundingBox], probe: f64) -> bool {
    obstacles.iter().any(|o| {
        let gap = body.y0 - o.y1;
        body.overlaps_x(o) && 0.0 <= gap && gap < probe
    })
}

/// Flat deceleration toward zero that never flips the sign
fn apply_friction(vx: f64, decel: f64) -> f64 {
    if vx > 0.0 {
        (vx - decel).max(0.0)
    } else if vx < 0.0 {
        (vx + decel).min(0.0)
    } else {
        vx
    }
}

/// Advance the world by `dt` seconds
///
/// Once the world is dead or won this is a no-op returning the cached outcome.
/// A non-positive `dt` leaves the world untouched as well.
pub fn tick(world: &mut World, input: &TickInput, dt: f64) -> Outcome {
    if world.is_terminal() || !(dt > 0.0) {
        return world.outcome;
    }

    let now = world.time;
    let tuning = &world.tuning;

    // Horizontal: input, speed clamp, friction
    let ax = match input.analog_x {
        Some(analog) => tuning.run_acceleration * analog,
        None => {
            world.input_acc = world.input_acc.max(-1.0).min(1.0);
            tuning.run_acceleration * world.input_acc
        }
    };
    let vx = (world.velocity.x + ax * dt)
        .min(tuning.max_speed)
        .max(-tuning.max_speed);
    let vx = apply_friction(vx, tuning.friction * dt);

    if vx > tuning.facing_threshold {
        world.facing = Facing::Right;
    } else if vx < -tuning.facing_threshold {
        world.facing = Facing::Left;
    }

    // Vertical: gravity plus jump thrust once the press meets the ground
    let mut ay = tuning.gravity;
    if let Some(jump) = world.jump.as_mut() {
        if !jump.bounced() && touches_ground(&world.body, &world.level.obstacles, tuning.ground_probe)
        {
            jump.bounce(now);
            if jump.bounced() {
                log::debug!("jump fired at t={:.3} (pressed {:.3})", now, jump.press_time());
            }
        }
        ay += jump.vert_acc(now);
    }
    let vy = world.velocity.y + ay * dt;

    let motion = move_and_collide(
        world.body,
        DVec2::new(vx, vy),
        dt,
        &world.level.obstacles,
        tuning.effective_bounciness(),
    );
    world.body = motion.bbox;
    world.velocity = motion.velocity;
    world.time += dt;

    world.outcome = if !world.level.bounds.contains(&world.body) {
        world.dead = true;
        log::info!("player left the level at {}", world.body);
        Outcome::Dead
    } else if world.level.goal.contains(&world.body) {
        world.won = true;
        log::info!("player reached the goal at t={:.3}", world.time);
        Outcome::Win
    } else {
        Outcome::Normal
    };
    world.outcome
}
