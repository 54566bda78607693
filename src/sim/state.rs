//! Game state and core simulation types
//!
//! All state for one play-through lives here; the session owns its own
//! seeded RNG so spawn sequences are reproducible.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// The auto-running player. Horizontal position is fixed at `PLAYER_X`;
/// only the vertical axis simulates.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top edge of the player box
    pub y: f32,
    /// Vertical velocity (positive = falling)
    pub vy: f32,
    /// True iff airborne (not resting on the ground line)
    pub jumping: bool,
}

impl Player {
    /// Resting vertical position on the ground line
    pub fn ground_rest_y() -> f32 {
        GROUND_Y - PLAYER_SIZE
    }

    /// New player at rest on the ground
    pub fn at_rest() -> Self {
        Self {
            y: Self::ground_rest_y(),
            vy: 0.0,
            jumping: false,
        }
    }

    /// True iff resting exactly on the ground line
    pub fn on_ground(&self) -> bool {
        self.y >= Self::ground_rest_y()
    }
}

/// A single obstacle scrolling right-to-left
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Set once the score for passing this obstacle has been credited
    pub scored: bool,
}

impl Obstacle {
    /// Spawn at the right edge of the playfield
    pub fn spawn(width: f32, height: f32) -> Self {
        Self {
            x: SURFACE_W,
            width,
            height,
            scored: false,
        }
    }

    /// Right edge
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// Complete state of one play-through, from start to game over.
///
/// Exclusively owned by the loop driver's host for the session lifetime;
/// mutated only by `sim::step` and `request_jump`.
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    /// False once a collision ends the run
    pub running: bool,
    pub player: Player,
    /// Spawn order; scanned front-to-back each tick
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Current scroll speed, a pure function of cumulative score
    pub speed: f32,
    /// Countdown to the next spawn, decremented by `speed` each tick
    pub(crate) next_spawn: f32,
    /// Spawn RNG, seeded at construction
    pub(crate) rng: Pcg32,
}

impl Session {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            running: true,
            player: Player::at_rest(),
            obstacles: Vec::new(),
            score: 0,
            speed: BASE_SPEED,
            next_spawn: FIRST_SPAWN_GAP,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Request a jump. Idempotent while airborne: a second request before
    /// landing changes nothing (no double jump, no queueing).
    pub fn request_jump(&mut self) {
        if !self.player.jumping {
            self.player.vy = JUMP_VELOCITY;
            self.player.jumping = true;
        }
    }
}
