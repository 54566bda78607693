//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per scheduled frame
//! - Seeded RNG only
//! - Stable front-to-back obstacle scan
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, obstacle_box, player_box};
pub use state::{Obstacle, Player, Session};
pub use tick::{NullHooks, SessionHooks, step};
