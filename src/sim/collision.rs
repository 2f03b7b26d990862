//! Axis-aligned overlap and playfield containment
//!
//! Both the player and the obstacles are plain boxes, so everything here is
//! a handful of comparisons. Rectangles use a top-left origin with y growing
//! downward, matching screen space.

use glam::Vec2;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

/// Playfield rectangle anchored at the origin
#[inline]
pub fn world_bounds(width: f32, height: f32) -> Aabb {
    Aabb::new(Vec2::ZERO, Vec2::new(width, height))
}

/// True while any part of `body` is still inside `world`
///
/// A body fully above the ceiling or fully below the floor is out of the world.
#[inline]
pub fn in_world(body: &Aabb, world: &Aabb) -> bool {
    body.overlaps(world)
}

/// True once the box has scrolled completely past the left edge `min_x`
#[inline]
pub fn past_left_edge(body: &Aabb, min_x: f32) -> bool {
    body.max().x < min_x
}
