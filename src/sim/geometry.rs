//! Axis-aligned box geometry
//!
//! Screen-space convention: origin at the arena's top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Strict AABB overlap test. Boxes whose edges only touch do not intersect.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn intersects(ax: f32, ay: f32, aw: f32, ah: f32, bx: f32, by: f32, bw: f32, bh: f32) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Scale the box by `factor` around its own center
    pub fn shrunk(&self, factor: f32) -> Self {
        let size = self.size * factor;
        Self {
            pos: self.pos + (self.size - size) / 2.0,
            size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(
            self.pos.x,
            self.pos.y,
            self.size.x,
            self.size.y,
            other.pos.x,
            other.pos.y,
            other.size.x,
            other.size.y,
        )
    }
}
