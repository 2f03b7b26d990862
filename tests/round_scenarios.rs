//! End-to-end round scenarios driven through the frame tick

use flappy::Tuning;
use flappy::consts::SIM_DT;
use flappy::sim::{GameEvent, Round, RoundPhase, TickInput, TimerState, tick};
use glam::Vec2;

/// Pipes stand still at the right edge and the player hovers, so only the
/// spawn timer changes anything
fn still_tuning() -> Tuning {
    Tuning {
        gravity: 0.0,
        obstacle_speed: 0.0,
        ..Default::default()
    }
}

fn run_frames(round: &mut Round, frames: u32) {
    let input = TickInput::default();
    for _ in 0..frames {
        tick(round, &input, SIM_DT);
    }
}

#[test]
fn spawn_cadence_and_score() {
    let mut round = Round::new(still_tuning(), 2024).unwrap();

    // 1 second: no row yet
    run_frames(&mut round, 60);
    assert_eq!(round.score, 0);
    assert_eq!(round.pool.active_count(), 0);

    // Past 1500 ms: first row, no score
    run_frames(&mut round, 35);
    assert_eq!(round.rows_spawned, 1);
    assert_eq!(round.score, 0);
    assert_eq!(round.pool.active_count(), 6);

    // Past 3000 ms: second row scores
    run_frames(&mut round, 90);
    assert_eq!(round.rows_spawned, 2);
    assert_eq!(round.score, 1);
    assert_eq!(round.pool.active_count(), 12);
    assert_eq!(round.phase, RoundPhase::Running);
}

#[test]
fn collision_stops_spawning_for_good() {
    let mut round = Round::new(still_tuning(), 7).unwrap();
    run_frames(&mut round, 100);
    assert_eq!(round.pool.active_count(), 6);

    // Drop a pipe onto the player
    let pos = round.player.pos;
    round.pool.acquire(pos, 0.0).unwrap();
    run_frames(&mut round, 1);
    assert_eq!(round.phase, RoundPhase::Ended);
    assert_eq!(round.spawn_timer.state(), TimerState::Cancelled);

    let events = round.drain_events();
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::PipeHit { .. }))
            .count(),
        1
    );

    // Several more spawn intervals
    run_frames(&mut round, 400);
    assert_eq!(round.pool.active_count(), 7);
    assert_eq!(round.score, 0);
    assert_eq!(round.rows_spawned, 1);
    assert!(round.drain_events().is_empty());
}

#[test]
fn moving_pipes_freeze_on_hit() {
    let mut round = Round::new(Tuning::default(), 3).unwrap();
    round.start();
    round.pool.acquire(Vec2::new(300.0, 10.0), -200.0).unwrap();
    round.pool.acquire(Vec2::new(300.0, 430.0), -200.0).unwrap();
    let pos = round.player.pos;
    round.pool.acquire(pos, -200.0).unwrap();

    run_frames(&mut round, 1);
    assert!(!round.player.alive);
    assert!(round.pool.active().all(|o| o.vel_x == 0.0));
}

#[test]
fn falling_out_restarts_to_fresh_round() {
    let mut round = Round::new(Tuning::default(), 99).unwrap();
    round.start();
    let first_seed = round.seed;

    let mut restarted = false;
    for _ in 0..120 {
        tick(&mut round, &TickInput::default(), SIM_DT);
        if round
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::Restarted { .. }))
        {
            restarted = true;
            break;
        }
    }
    assert!(restarted, "player should have fallen out of the world");

    let mut fresh = Round::new(Tuning::default(), round.seed).unwrap();
    fresh.start();
    assert_eq!(round, fresh);
    assert_ne!(round.seed, first_seed);
}

#[test]
fn flying_off_the_top_restarts() {
    let mut round = Round::new(still_tuning(), 5).unwrap();
    round.start();
    round.score = 4;
    round.player.pos.y = -round.tuning.player_size.y - 1.0;

    run_frames(&mut round, 1);
    assert_eq!(round.score, 0);
    assert_eq!(round.player.pos, round.tuning.player_start);
    assert!(round.player.alive);
}

#[test]
fn jumping_keeps_player_up() {
    let mut round = Round::new(Tuning::default(), 1).unwrap();
    let jump = TickInput {
        jump: true,
        ..Default::default()
    };
    // Flap every 20 frames for half a second
    for frame in 0..30 {
        let input = if frame % 20 == 0 {
            jump.clone()
        } else {
            TickInput::default()
        };
        tick(&mut round, &input, SIM_DT);
    }
    assert!(round.player.pos.y < round.tuning.player_start.y);
    assert_eq!(round.phase, RoundPhase::Running);
}
