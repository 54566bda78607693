//! Frame-loop state machine
//!
//! Owns the step-then-draw cadence and the cancellation contract. The
//! driver is platform-free: the host supplies per-frame scheduling
//! (requestAnimationFrame on wasm, a plain loop headless) and asks the
//! driver after each frame whether another one should be scheduled.

use crate::renderer::{self, Surface};
use crate::sim::{self, Session, SessionHooks};

/// Scheduling state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Ticks are being scheduled
    Active,
    /// No further ticks; terminal until a fresh driver is built
    Stopped,
}

/// Two-state loop driver: exactly one `step` then one `draw` per frame
/// while Active; Stopped after game over or teardown.
#[derive(Debug)]
pub struct LoopDriver {
    state: DriverState,
}

impl Default for LoopDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopDriver {
    /// A new driver starts Active
    pub fn new() -> Self {
        Self {
            state: DriverState::Active,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == DriverState::Active
    }

    /// Run one frame: step the simulation, then draw the post-tick state.
    /// Returns true iff a further frame should be scheduled. A stray
    /// callback arriving after stop is a no-op.
    pub fn frame<H: SessionHooks>(
        &mut self,
        session: &mut Session,
        hooks: &mut H,
        surface: &mut impl Surface,
    ) -> bool {
        if self.state != DriverState::Active {
            return false;
        }

        sim::step(session, hooks);
        renderer::draw(session, surface);

        if !session.running {
            self.state = DriverState::Stopped;
        }
        self.is_active()
    }

    /// Stop scheduling and defensively halt the session so a stray tick or
    /// input callback can never advance it. Idempotent.
    pub fn teardown(&mut self, session: &mut Session) {
        if self.state == DriverState::Active {
            log::debug!("loop driver torn down at score {}", session.score);
        }
        self.state = DriverState::Stopped;
        session.running = false;
    }
}
