//! Platform abstraction layer
//!
//! Host services the game consumes:
//! - Rendering of a round (sprites, background)
//! - Audio playback (see `crate::audio`)
//! - The score label
//!
//! Input reaches the sim as `TickInput` flags set by the host.

pub mod headless;

use crate::sim::Round;

/// Draws a round. Read-only: all motion is computed by the sim.
pub trait Renderer {
    fn draw(&mut self, round: &Round);
}

/// Updatable numeric score display
pub trait ScoreLabel {
    fn set_score(&mut self, score: u32);
}
