//! Fixed timestep simulation tick
//!
//! Core frame callback that advances a round deterministically.

use super::collision::in_world;
use super::spawner::spawn_row;
use super::state::{GameEvent, Round, RoundPhase};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap key pressed this frame (edge, not level)
    pub jump: bool,
    /// Discard the round and start a new one
    pub restart: bool,
    /// Idle/demo mode - the sim flaps on its own
    pub idle_mode: bool,
}

/// Advance the round by one fixed timestep
///
/// Frame order: motion, off-screen release, jump input, spawn timer, boundary
/// check, pipe collision, nose-down drift, jump rotation. The rotation runs
/// last so a running jump tween overrides the drift.
pub fn tick(round: &mut Round, input: &TickInput, dt: f32) {
    if round.phase == RoundPhase::Initializing {
        round.start();
    }

    if input.restart {
        round.restart();
        return;
    }

    round.time_ticks += 1;
    let dt_ms = dt as f64 * 1000.0;
    let wants_jump = input.jump || (input.idle_mode && autopilot_wants_jump(round));

    // --- MOTION ---
    round.player.integrate(round.tuning.gravity, dt);
    round.pool.advance(dt);
    round.pool.release_offscreen(0.0);

    // --- PLAYER INPUT ---
    if wants_jump && round.player.jump(&round.tuning) {
        round.events.push(GameEvent::Jumped);
    }

    // --- SPAWNING ---
    // A cancelled timer reports zero fires, so nothing spawns after a hit
    let rows_due = round.spawn_timer.advance(dt_ms);
    for _ in 0..rows_due {
        spawn_row(round);
    }

    // --- BOUNDARY ---
    if !in_world(&round.player_bounds(), &round.world()) {
        round.restart();
        return;
    }

    // --- COLLISION ---
    if round.player.alive && round.pool.any_overlap(&round.player_bounds()) {
        round.hit_pipe();
    }

    // --- COSMETIC ---
    round
        .player
        .drift(round.tuning.drift_step, round.tuning.max_drift_angle);
    round.player.advance_rotation(dt_ms);
}

/// Vertical center of the gap in the nearest obstacle column still ahead of
/// the player, if any column is on screen
pub fn next_gap_center(round: &Round) -> Option<f32> {
    let size = round.pool.size();
    let player = round.player_bounds();

    let column_x = round
        .pool
        .active()
        .map(|o| o.pos.x)
        .filter(|&x| x + size.x >= player.min.x)
        .min_by(|a, b| a.total_cmp(b))?;

    let mut tops: Vec<f32> = round
        .pool
        .active()
        .filter(|o| (o.pos.x - column_x).abs() < 0.5)
        .map(|o| o.pos.y)
        .collect();
    tops.sort_by(|a, b| a.total_cmp(b));

    // Widest free interval between consecutive obstacles, world edges included
    let mut best = (round.tuning.world_height * 0.5, f32::MIN);
    let mut prev_bottom = 0.0;
    for top in tops {
        let width = top - prev_bottom;
        if width > best.1 {
            best = (prev_bottom + width * 0.5, width);
        }
        prev_bottom = top + size.y;
    }
    let width = round.tuning.world_height - prev_bottom;
    if width > best.1 {
        best = (prev_bottom + width * 0.5, width);
    }

    Some(best.0)
}

/// Flap when falling and sagging below the gap center.
/// The margin keeps the jump arc inside a two-slot gap.
fn autopilot_wants_jump(round: &Round) -> bool {
    const SAG_MARGIN: f32 = 25.0;

    if !round.player.alive {
        return false;
    }
    let target = next_gap_center(round).unwrap_or(round.tuning.world_height * 0.5);
    round.player.vel_y >= 0.0 && round.player_bounds().center().y > target + SAG_MARGIN
}
