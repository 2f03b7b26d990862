//! Data-driven game balance
//!
//! Defaults are the standard balance. A host may override any subset of
//! values from a JSON document; missing fields fall back to the defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::SimError;
use crate::consts::*;

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub world_width: f32,
    pub world_height: f32,

    // === Player ===
    pub player_start: Vec2,
    pub player_size: Vec2,
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Vertical velocity a jump sets (negative is up)
    pub jump_velocity: f32,
    /// Target angle of the jump rotation tween (degrees)
    pub jump_angle: f32,
    pub jump_tween_ms: f64,
    pub max_drift_angle: f32,
    pub drift_step: f32,

    // === Obstacles ===
    pub pool_capacity: usize,
    pub obstacle_size: Vec2,
    /// Leftward scroll speed (units/s, positive)
    pub obstacle_speed: f32,

    // === Spawner ===
    pub spawn_interval_ms: f64,
    pub row_slots: u32,
    pub slot_spacing: f32,
    pub slot_offset: f32,
    pub hole_min: u32,
    pub hole_max: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_size: Vec2::splat(PLAYER_SIZE),
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            jump_angle: JUMP_ANGLE,
            jump_tween_ms: JUMP_TWEEN_MS,
            max_drift_angle: MAX_DRIFT_ANGLE,
            drift_step: DRIFT_STEP,

            pool_capacity: POOL_CAPACITY,
            obstacle_size: Vec2::splat(OBSTACLE_SIZE),
            obstacle_speed: OBSTACLE_SPEED,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            row_slots: ROW_SLOTS,
            slot_spacing: SLOT_SPACING,
            slot_offset: SLOT_OFFSET,
            hole_min: HOLE_MIN,
            hole_max: HOLE_MAX,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the sim cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(SimError::InvalidTuning(format!(
                "world must have positive size, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if self.pool_capacity == 0 {
            return Err(SimError::InvalidTuning("pool capacity must be at least 1".into()));
        }
        if self.spawn_interval_ms <= 0.0 {
            return Err(SimError::InvalidTuning(format!(
                "spawn interval must be positive, got {} ms",
                self.spawn_interval_ms
            )));
        }
        if self.hole_min > self.hole_max {
            return Err(SimError::InvalidTuning(format!(
                "hole range is empty ({}..={})",
                self.hole_min, self.hole_max
            )));
        }
        // Both gap slots must lie inside the row
        if self.hole_max >= self.row_slots.saturating_sub(1) {
            return Err(SimError::InvalidTuning(format!(
                "gap starting at slot {} does not fit in {} row slots",
                self.hole_max, self.row_slots
            )));
        }
        Ok(())
    }

    /// Top edge of row slot `slot`
    #[inline]
    pub fn slot_y(&self, slot: u32) -> f32 {
        slot as f32 * self.slot_spacing + self.slot_offset
    }

    /// X coordinate new obstacles appear at (the right edge of the playfield)
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.world_width
    }

    /// Obstacles spawned per row (row slots minus the two-slot gap)
    pub fn obstacles_per_row(&self) -> u32 {
        self.row_slots.saturating_sub(2)
    }
}
