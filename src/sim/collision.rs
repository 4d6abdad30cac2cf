//! Continuous collision resolution against static boxes
//!
//! The tricky part of the kernel: moving a box along its velocity for a time
//! step without ever leaving it inside an obstacle. The time of first contact
//! is found by bisection with a fixed number of halvings, so the cost per
//! obstacle hit is constant and the contact is accurate to `dt / 64`.

use glam::DVec2;

use super::bbox::BoundingBox;
use crate::consts::BISECTION_STEPS;

/// Result of moving a box through the obstacle set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Where the box ended up
    pub bbox: BoundingBox,
    /// Velocity after blocked components were absorbed or reflected
    pub velocity: DVec2,
    /// Part of the time step that was not spent moving
    pub remaining: f64,
    /// Last obstacle that truncated the move (if any)
    pub blocker: Option<BoundingBox>,
}

impl Motion {
    fn unblocked(bbox: BoundingBox, velocity: DVec2) -> Self {
        Self {
            bbox,
            velocity,
            remaining: 0.0,
            blocker: None,
        }
    }

    /// Whether any obstacle stopped the move
    pub fn collided(&self) -> bool {
        self.blocker.is_some()
    }
}

/// Largest time in `[0, hi]` (to `hi / 64`) at which `bbox` moving at
/// `velocity` does not intersect `obstacle`
fn last_free_time(bbox: BoundingBox, velocity: DVec2, hi: f64, obstacle: &BoundingBox) -> f64 {
    let mut lo = 0.0;
    let mut hi = hi;
    for _ in 0..BISECTION_STEPS {
        let mid = (lo + hi) / 2.0;
        if bbox.advance(velocity, mid).intersects(obstacle) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}

/// Move `bbox` at `velocity` for up to `dt`, stopping just before the first
/// obstacle hit
///
/// Obstacles are scanned in order and the first one the tentative end
/// position intersects is resolved, not necessarily the one reached first in
/// time. The scan repeats from the shortened position until a full pass finds
/// nothing. Velocity components along an axis the blocker was not already
/// overlapping on are reflected and scaled by `bounciness` (0 absorbs them).
///
/// Returns the leftover time in [`Motion::remaining`].
pub fn move_till_first_collision(
    bbox: BoundingBox,
    velocity: DVec2,
    dt: f64,
    obstacles: &[BoundingBox],
    bounciness: f64,
) -> Motion {
    // Also rejects NaN
    if !(dt > 0.0) {
        return Motion::unblocked(bbox, velocity);
    }

    let mut new_box = bbox.advance(velocity, dt);
    let mut new_dt = dt;
    let mut blocker: Option<BoundingBox> = None;

    while let Some(other) = obstacles.iter().find(|o| new_box.intersects(o)) {
        blocker = Some(*other);
        new_dt = last_free_time(bbox, velocity, new_dt, other);
        new_box = bbox.advance(velocity, new_dt);
        log::trace!("truncated move against {} at t={}", other, new_dt);

        if new_box.intersects(other) {
            // Six halvings were not enough (or the box started inside the obstacle)
            log::warn!(
                "collision bisection left {} overlapping {} (velocity {:?}, dt {})",
                new_box,
                other,
                velocity,
                dt
            );
            break;
        }
    }

    let mut new_velocity = velocity;
    if let Some(other) = &blocker {
        if !bbox.overlaps_x(other) {
            new_velocity.x = -bounciness * velocity.x;
        }
        if !bbox.overlaps_y(other) {
            new_velocity.y = -bounciness * velocity.y;
        }
    }

    Motion {
        bbox: new_box,
        velocity: new_velocity,
        remaining: dt - new_dt,
        blocker,
    }
}

/// Move and collide, then spend any leftover time sliding with the corrected
/// velocity
///
/// At most two passes run. Time left over after the second pass is dropped, so
/// a body that hits a second surface in the same step loses that bit of motion.
pub fn move_and_collide(
    bbox: BoundingBox,
    velocity: DVec2,
    dt: f64,
    obstacles: &[BoundingBox],
    bounciness: f64,
) -> Motion {
    let first = move_till_first_collision(bbox, velocity, dt, obstacles, bounciness);
    if first.remaining > 0.0 {
        let second = move_till_first_collision(
            first.bbox,
            first.velocity,
            first.remaining,
            obstacles,
            bounciness,
        );
        return Motion {
            blocker: second.blocker.or(first.blocker),
            ..second
        };
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 1.0, 1.0)
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let wall = [BoundingBox::new(1.0, 0.0, 2.0, 1.0)];
        let vel = DVec2::new(3.0, -2.0);
        let m = move_and_collide(unit_box(), vel, 0.0, &wall, 0.0);
        assert_eq!(m.bbox, unit_box());
        assert_eq!(m.velocity, vel);
        assert!(!m.collided());
    }

    #[test]
    fn test_negative_dt_does_not_move() {
        let m = move_and_collide(unit_box(), DVec2::new(5.0, 5.0), -1.0, &[], 0.0);
        assert_eq!(m.bbox, unit_box());
        assert_eq!(m.velocity, DVec2::new(5.0, 5.0));
        assert_eq!(m.remaining, 0.0);
    }

    #[test]
    fn test_no_obstacles_full_move() {
        let m = move_and_collide(unit_box(), DVec2::new(5.0, 0.0), 1.0, &[], 0.0);
        assert_eq!(m.bbox, unit_box().translate(5.0, 0.0));
        assert_eq!(m.velocity, DVec2::new(5.0, 0.0));
        assert_eq!(m.remaining, 0.0);
    }

    #[test]
    fn test_blocked_move_absorbs_velocity() {
        let wall = BoundingBox::new(1.0, 0.0, 2.0, 1.0);
        let m = move_and_collide(unit_box(), DVec2::new(10.0, 0.0), 1.0, &[wall], 0.0);
        assert!(m.bbox.x1 <= 1.0);
        assert_eq!(m.velocity.x, 0.0);
        assert_eq!(m.velocity.y, 0.0);
        assert!(!m.bbox.intersects(&wall));
        assert_eq!(m.blocker, Some(wall));
    }

    #[test]
    fn test_elastic_bounce_reflects_velocity() {
        let wall = BoundingBox::new(1.0, 0.0, 2.0, 1.0);
        let m = move_till_first_collision(unit_box(), DVec2::new(10.0, 0.0), 1.0, &[wall], 1.0);
        assert!((m.velocity.x + 10.0).abs() < 1e-9);
        assert!(!m.bbox.intersects(&wall));

        let m = move_and_collide(unit_box(), DVec2::new(10.0, 0.0), 1.0, &[wall], 1.0);
        assert!((m.velocity.x + 10.0).abs() < 1e-9);
        assert!(!m.bbox.intersects(&wall));
    }

    #[test]
    fn test_first_pass_reports_leftover_time() {
        // Contact at t = 0.25 lands exactly on a bisection point
        let floor = BoundingBox::new(-10.0, -10.0, 10.0, 1.0);
        let start = BoundingBox::new(0.0, 2.0, 1.0, 3.0);
        let m = move_till_first_collision(start, DVec2::new(4.0, -4.0), 0.5, &[floor], 0.0);
        assert_eq!(m.bbox, BoundingBox::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(m.remaining, 0.25);
        assert_eq!(m.velocity.x, 4.0);
        assert_eq!(m.velocity.y, 0.0);
    }

    #[test]
    fn test_second_pass_slides_along_floor() {
        let floor = BoundingBox::new(-10.0, -10.0, 10.0, 1.0);
        let start = BoundingBox::new(0.0, 2.0, 1.0, 3.0);
        let m = move_and_collide(start, DVec2::new(4.0, -4.0), 0.5, &[floor], 0.0);
        assert_eq!(m.bbox, BoundingBox::new(2.0, 1.0, 3.0, 2.0));
        assert_eq!(m.velocity, DVec2::new(4.0, 0.0));
        assert_eq!(m.remaining, 0.0);
    }

    #[test]
    fn test_rescan_resolves_nearer_obstacle_listed_later() {
        let far = BoundingBox::new(9.0, 0.0, 12.0, 1.0);
        let near = BoundingBox::new(5.0, 0.0, 12.0, 1.0);
        let m = move_till_first_collision(unit_box(), DVec2::new(10.0, 0.0), 1.0, &[far, near], 0.0);
        assert!(m.bbox.x1 <= 5.0);
        assert!(!m.bbox.intersects(&far));
        assert!(!m.bbox.intersects(&near));
        assert_eq!(m.blocker, Some(near));
        assert_eq!(m.velocity.x, 0.0);
    }

    #[test]
    fn test_only_end_position_is_checked() {
        // A thin wall fully skipped over in one step is not seen
        let thin = BoundingBox::new(3.0, 0.0, 3.5, 1.0);
        let m = move_and_collide(unit_box(), DVec2::new(10.0, 0.0), 1.0, &[thin], 0.0);
        assert_eq!(m.bbox, unit_box().translate(10.0, 0.0));
        assert!(!m.collided());
    }

    #[test]
    fn test_corner_hit_stops_both_axes() {
        let block = BoundingBox::new(2.0, 2.0, 3.0, 3.0);
        let m = move_and_collide(unit_box(), DVec2::new(2.0, 2.0), 1.0, &[block], 0.0);
        assert_eq!(m.velocity, DVec2::ZERO);
        assert!(!m.bbox.intersects(&block));
    }

    #[test]
    fn test_start_inside_obstacle_gives_up() {
        let block = BoundingBox::new(0.5, 0.5, 2.0, 2.0);
        let m = move_till_first_collision(unit_box(), DVec2::new(1.0, 0.0), 1.0, &[block], 0.0);
        assert_eq!(m.bbox, unit_box());
        assert_eq!(m.remaining, 1.0);
    }
}
