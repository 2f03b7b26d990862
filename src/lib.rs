//! Flappy - A single-screen flap-through-the-pipes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player body, obstacle pool, spawner, round lifecycle)
//! - `game`: Fixed-timestep driver that feeds the sim and dispatches its events
//! - `platform`: Host service contracts (rendering, score label) and a headless host
//! - `audio`: Sound effect contract
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 490.0;
    /// Background colour (sky)
    pub const BACKGROUND_COLOR: u32 = 0x71c5cf;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 245.0;
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 1000.0;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -350.0;
    /// Nose-up angle the jump tween rotates toward (degrees)
    pub const JUMP_ANGLE: f32 = -20.0;
    /// Jump tween duration (ms)
    pub const JUMP_TWEEN_MS: f64 = 100.0;
    /// Nose-down drift ceiling and per-frame step (degrees)
    pub const MAX_DRIFT_ANGLE: f32 = 20.0;
    pub const DRIFT_STEP: f32 = 1.0;

    /// Obstacle defaults
    pub const POOL_CAPACITY: usize = 20;
    pub const OBSTACLE_SIZE: f32 = 50.0;
    pub const OBSTACLE_SPEED: f32 = 200.0;

    /// Spawner defaults
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
    pub const ROW_SLOTS: u32 = 8;
    pub const SLOT_SPACING: f32 = 60.0;
    pub const SLOT_OFFSET: f32 = 10.0;
    /// Inclusive range of the first gap slot
    pub const HOLE_MIN: u32 = 1;
    pub const HOLE_MAX: u32 = 5;
}

/// Linear interpolation between `a` and `b` by `t` in [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

