//! Round state and core simulation types
//!
//! A `Round` is one playthrough from reset to restart. It is the only mutable
//! game state; restarting replaces it wholesale instead of resetting fields.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, world_bounds};
use super::player::PlayerBody;
use super::pool::ObstaclePool;
use super::schedule::Timer;
use crate::{SimError, Tuning};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Built but not started; nothing moves
    Initializing,
    /// Active gameplay
    Running,
    /// Player hit a pipe: pipes frozen, no spawning, body still falls
    Ended,
}

/// Something the host may want to react to (sound, label, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player flapped (host plays the jump sound)
    Jumped,
    /// A row of obstacles was placed
    RowSpawned { hole: u32, spawned: u32 },
    /// Score changed to the given value
    ScoreChanged(u32),
    /// Player hit a pipe
    PipeHit { score: u32 },
    /// Round replaced after the player left the playfield
    Restarted { final_score: u32 },
    /// A row slot was skipped because every pool slot was active
    PoolExhausted,
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Seed this round's RNG was created from
    pub seed: u64,
    /// Gap selection RNG
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: RoundPhase,
    pub player: PlayerBody,
    pub pool: ObstaclePool,
    pub score: u32,
    /// Rows placed this round (the first row does not score)
    pub rows_spawned: u32,
    /// Repeating spawn task; cancelled on pipe hit
    pub spawn_timer: Timer,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Round {
    /// Create a fresh round in `Initializing`.
    ///
    /// Fails with `SimError::InvalidTuning` if the tuning cannot drive a round.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, SimError> {
        tuning.validate()?;
        Ok(Self::with_tuning(tuning, seed))
    }

    /// Build a round from tuning that is already known to be valid
    fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RoundPhase::Initializing,
            player: PlayerBody::new(tuning.player_start),
            pool: ObstaclePool::new(tuning.pool_capacity, tuning.obstacle_size),
            score: 0,
            rows_spawned: 0,
            spawn_timer: Timer::new(tuning.spawn_interval_ms),
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// `Initializing -> Running`: arms the spawn timer. No-op in any other phase.
    pub fn start(&mut self) {
        if self.phase != RoundPhase::Initializing {
            return;
        }
        self.spawn_timer.arm();
        self.phase = RoundPhase::Running;
        log::info!("Round started (seed {})", self.seed);
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    pub fn player_bounds(&self) -> Aabb {
        self.player.bounds(self.tuning.player_size)
    }

    pub fn world(&self) -> Aabb {
        world_bounds(self.tuning.world_width, self.tuning.world_height)
    }

    /// Pipe collision: kill the player, cancel spawning, freeze every pipe.
    /// Idempotent once the player is dead.
    pub fn hit_pipe(&mut self) {
        if !self.player.alive {
            return;
        }

        self.player.alive = false;
        self.spawn_timer.cancel();
        self.pool.for_each_active_mut(|o| o.vel_x = 0.0);
        self.phase = RoundPhase::Ended;
        self.events.push(GameEvent::PipeHit { score: self.score });
        log::info!("Pipe hit at score {}", self.score);
    }

    /// Replace this round with a brand-new running one.
    ///
    /// The next seed is drawn from this round's RNG so consecutive rounds get
    /// different rows. Tuning carries over; undrained events are kept.
    pub fn restart(&mut self) {
        let final_score = self.score;
        let next_seed = self.rng.next_u64();
        let events = std::mem::take(&mut self.events);

        *self = Round::with_tuning(self.tuning.clone(), next_seed);
        self.start();

        self.events = events;
        self.events.push(GameEvent::Restarted { final_score });
        log::info!("Round restarted (previous score {})", final_score);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Raise the score by one
    pub fn increment_score(&mut self) {
        self.score += 1;
        self.events.push(GameEvent::ScoreChanged(self.score));
    }
}
