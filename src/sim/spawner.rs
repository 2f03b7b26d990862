//! Obstacle rows
//!
//! Each row is `row_slots` stacked obstacles at the right edge with a two-slot
//! gap. The first gap slot is drawn from `hole_min..=hole_max`; with the
//! default 8 slots and 1..=5 the top and bottom slots are never part of the gap.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, Round};

/// Pick the first slot of the gap
pub fn pick_hole<R: Rng>(rng: &mut R, hole_min: u32, hole_max: u32) -> u32 {
    rng.random_range(hole_min..=hole_max)
}

/// Row slots that receive an obstacle for a given hole
pub fn filled_slots(row_slots: u32, hole: u32) -> impl Iterator<Item = u32> {
    let second = hole.checked_add(1);
    (0..row_slots).filter(move |&slot| slot != hole && Some(slot) != second)
}

/// Place one row of obstacles and update the score.
///
/// Slots the pool cannot supply are skipped and reported. Returns the number
/// of obstacles placed.
pub fn spawn_row(round: &mut Round) -> u32 {
    let hole = pick_hole(&mut round.rng, round.tuning.hole_min, round.tuning.hole_max);
    let x = round.tuning.spawn_x();
    let vel_x = -round.tuning.obstacle_speed;

    let mut spawned = 0;
    for slot in filled_slots(round.tuning.row_slots, hole) {
        let pos = Vec2::new(x, round.tuning.slot_y(slot));
        match round.pool.acquire(pos, vel_x) {
            Ok(_) => spawned += 1,
            Err(err) => {
                log::warn!("Skipping row slot {}: {}", slot, err);
                round.events.push(GameEvent::PoolExhausted);
            }
        }
    }

    round.events.push(GameEvent::RowSpawned { hole, spawned });
    log::debug!(
        "Row {} spawned: hole={}, obstacles={}",
        round.rows_spawned,
        hole,
        spawned
    );

    // The first row has not been passed yet
    if round.rows_spawned != 0 {
        round.increment_score();
    }
    round.rows_spawned += 1;

    spawned
}
