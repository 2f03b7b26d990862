//! The player body: one falling box with a cosmetic rotation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::schedule::Tween;
use crate::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    /// Rotation in degrees (positive is nose-down)
    pub angle: f32,
    /// Cleared by a pipe hit; a dead body still falls but ignores jumps
    pub alive: bool,
    /// Active jump rotation, if any
    pub rotation: Option<Tween>,
}

impl PlayerBody {
    pub fn new(start: Vec2) -> Self {
        Self {
            pos: start,
            vel_y: 0.0,
            angle: 0.0,
            alive: true,
            rotation: None,
        }
    }

    pub fn bounds(&self, size: Vec2) -> Aabb {
        Aabb::new(self.pos, size)
    }

    /// Accumulate gravity and integrate position
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        self.vel_y += gravity * dt;
        self.pos.y += self.vel_y * dt;
    }

    /// Flap upward. Returns false (and changes nothing) once dead.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if !self.alive {
            return false;
        }

        self.vel_y = tuning.jump_velocity;
        // A new jump restarts the rotation from wherever the nose currently is
        self.rotation = Some(Tween::new(self.angle, tuning.jump_angle, tuning.jump_tween_ms));
        true
    }

    /// Step the jump rotation, dropping it once finished
    pub fn advance_rotation(&mut self, dt_ms: f64) {
        if let Some(tween) = &mut self.rotation {
            self.angle = tween.advance(dt_ms);
            if tween.is_finished() {
                self.rotation = None;
            }
        }
    }

    /// Slow nose-down drift, capped at `max_angle`
    pub fn drift(&mut self, step: f32, max_angle: f32) {
        if self.angle < max_angle {
            self.angle = (self.angle + step).min(max_angle);
        }
    }
}
