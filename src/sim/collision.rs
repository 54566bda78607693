//! Axis-aligned collision detection
//!
//! The player collides with obstacles as plain boxes. The player's hitbox
//! is narrower than the drawn sprite; obstacles stand on the ground line.

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::consts::*;

/// Axis-aligned box: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict half-plane overlap test. Edge contact (zero overlap area)
    /// is not a hit; any positive-area overlap is.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Player hitbox at its fixed horizontal position
pub fn player_box(player: &Player) -> Aabb {
    Aabb::new(
        Vec2::new(PLAYER_X, player.y),
        Vec2::new(PLAYER_HITBOX_W, PLAYER_SIZE),
    )
}

/// Obstacle box, grounded on the ground line
pub fn obstacle_box(obstacle: &Obstacle) -> Aabb {
    Aabb::new(
        Vec2::new(obstacle.x, GROUND_Y - obstacle.height),
        Vec2::new(obstacle.width, obstacle.height),
    )
}
