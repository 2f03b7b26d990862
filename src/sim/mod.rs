//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod player;
pub mod pool;
pub mod schedule;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, in_world, world_bounds};
pub use player::PlayerBody;
pub use pool::{Obstacle, ObstacleHandle, ObstaclePool};
pub use schedule::{Timer, TimerState, Tween};
pub use spawner::spawn_row;
pub use state::{GameEvent, Round, RoundPhase};
pub use tick::{TickInput, next_gap_center, tick};
