//! Pixel Runner - a single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `renderer`: Primitive-shape rendering over an abstract surface
//! - `driver`: Frame-loop state machine (Active/Stopped, clean cancellation)
//! - `highscores`: In-memory best-score tracking

pub mod driver;
pub mod highscores;
pub mod renderer;
pub mod sim;

pub use driver::LoopDriver;
pub use highscores::HighScore;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas pixels)
    pub const SURFACE_W: f32 = 800.0;
    pub const SURFACE_H: f32 = 400.0;

    /// Ground line the player rests on
    pub const GROUND_Y: f32 = SURFACE_H - 60.0;

    /// Player box - fixed horizontal position, square sprite
    pub const PLAYER_X: f32 = 60.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Collision hitbox is narrower than the drawn sprite
    pub const PLAYER_HITBOX_W: f32 = PLAYER_SIZE - 10.0;

    /// Vertical physics (per tick)
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_VELOCITY: f32 = -15.0;

    /// Scroll speed before any score ramp
    pub const BASE_SPEED: f32 = 6.0;
    /// Each point of score adds 1/100 to the scroll speed
    pub const SPEED_RAMP_DIVISOR: f32 = 100.0;

    /// Points credited per obstacle passed
    pub const OBSTACLE_POINTS: u32 = 10;

    /// Obstacle size ranges: base + rand() * range
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_HEIGHT_RANGE: f32 = 40.0;
    pub const OBSTACLE_MIN_WIDTH: f32 = 30.0;
    pub const OBSTACLE_WIDTH_RANGE: f32 = 20.0;

    /// Spawn countdown, decremented by current speed each tick
    pub const FIRST_SPAWN_GAP: f32 = 100.0;
    pub const SPAWN_GAP_MIN: f32 = 150.0;
    pub const SPAWN_GAP_RANGE: f32 = 200.0;

    /// Obstacles are dropped once fully past this margin off the left edge
    pub const DESPAWN_X: f32 = -50.0;
}
