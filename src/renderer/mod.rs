//! Primitive-shape rendering
//!
//! `draw` maps a session snapshot to draw commands on an abstract surface.
//! The Canvas2D backend lives in `canvas` (wasm32 only); tests drive the
//! same commands into a recording surface.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::consts::*;
use crate::sim::Session;

/// Scene palette (CSS colors, applied directly to the canvas context)
pub mod palette {
    pub const BACKGROUND: &str = "#1a1a2e";
    pub const GROUND: &str = "#16213e";
    pub const GROUND_LINE: &str = "#4fc3f7";
    pub const PLAYER: &str = "#4fc3f7";
    pub const PLAYER_EYE: &str = "#1a1a2e";
    pub const OBSTACLE: &str = "#ff6b6b";
}

/// Eye marker offset within the player box
const EYE_OFFSET: Vec2 = Vec2::new(20.0, 10.0);
const EYE_SIZE: Vec2 = Vec2::splat(10.0);

pub const GROUND_LINE_WIDTH: f32 = 2.0;

/// Drawing seam: the handful of primitives the game needs
pub trait Surface {
    /// Fill the whole surface
    fn clear(&mut self, color: &'static str);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &'static str);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &'static str);
}

/// Surface that discards every command (headless runs)
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _color: &'static str) {}
    fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: &'static str) {}
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: &'static str) {}
}

/// Render one frame. Stateless: reads the post-tick snapshot and emits
/// commands back-to-front; mutates nothing.
pub fn draw(session: &Session, surface: &mut impl Surface) {
    surface.clear(palette::BACKGROUND);

    surface.fill_rect(
        Vec2::new(0.0, GROUND_Y),
        Vec2::new(SURFACE_W, SURFACE_H - GROUND_Y),
        palette::GROUND,
    );
    surface.stroke_line(
        Vec2::new(0.0, GROUND_Y),
        Vec2::new(SURFACE_W, GROUND_Y),
        GROUND_LINE_WIDTH,
        palette::GROUND_LINE,
    );

    let player_pos = Vec2::new(PLAYER_X, session.player.y);
    surface.fill_rect(player_pos, Vec2::splat(PLAYER_SIZE), palette::PLAYER);
    surface.fill_rect(player_pos + EYE_OFFSET, EYE_SIZE, palette::PLAYER_EYE);

    for obstacle in &session.obstacles {
        surface.fill_rect(
            Vec2::new(obstacle.x, GROUND_Y - obstacle.height),
            Vec2::new(obstacle.width, obstacle.height),
            palette::OBSTACLE,
        );
    }
}
