//! Axis-aligned bounding box geometry
//!
//! Every entity in the world is a box defined by two corners:
//! - (x0, y0): bottom left
//! - (x1, y1): top right
//!
//! Boxes are values. Transforms return a new box and never mutate.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box with its bottom left corner at `min` and the given size
    pub fn from_min_size(min: DVec2, size: DVec2) -> Self {
        Self::new(min.x, min.y, min.x + size.x, min.y + size.y)
    }

    #[inline]
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.x0, self.y0)
    }

    #[inline]
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.x1, self.y1)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width(), self.height())
    }

    /// Midpoint of both axes
    pub fn center(&self) -> DVec2 {
        DVec2::new((self.x1 + self.x0) / 2.0, (self.y1 + self.y0) / 2.0)
    }

    /// Corners are ordered and finite
    pub fn is_valid(&self) -> bool {
        self.min().is_finite() && self.max().is_finite() && self.x0 <= self.x1 && self.y0 <= self.y1
    }

    /// Box shifted by (dx, dy)
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    /// Box moved at velocity (dx, dy) for `dt` seconds
    #[inline]
    pub fn translate_scaled(&self, dx: f64, dy: f64, dt: f64) -> Self {
        self.translate(dx * dt, dy * dt)
    }

    /// Box moved by `velocity * dt`
    #[inline]
    pub fn advance(&self, velocity: DVec2, dt: f64) -> Self {
        self.translate_scaled(velocity.x, velocity.y, dt)
    }

    /// Projections on the X axis overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &BoundingBox) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1
    }

    /// Projections on the Y axis overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_y(&self, other: &BoundingBox) -> bool {
        // Operand order kept as `y1 > other.y0` so NaN and -0.0 behave like the X test's mirror
        self.y0 < other.y1 && self.y1 > other.y0
    }

    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// `other` lies entirely inside this box, bounds inclusive
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.x0 <= other.x0 && self.y0 <= other.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Point lies inside this box, bounds inclusive
    pub fn contains_point(&self, p: DVec2) -> bool {
        self.x0 <= p.x && p.x <= self.x1 && self.y0 <= p.y && p.y <= self.y1
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) ({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}
