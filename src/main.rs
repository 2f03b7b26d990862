//! Flappy entry point
//!
//! Runs a headless demo: the autopilot plays for a fixed stretch of simulated
//! time while log-backed host services report what would be drawn and played.

use std::time::{SystemTime, UNIX_EPOCH};

use flappy::consts::SIM_DT;
use flappy::platform::headless::{LogAudio, LogRenderer, LogScoreLabel};
use flappy::{Game, SimError, Tuning};

/// Simulated seconds the demo runs for
const DEMO_SECONDS: u32 = 60;

fn main() -> Result<(), SimError> {
    env_logger::init();
    log::info!("Flappy (headless demo) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(
        Tuning::default(),
        seed,
        LogRenderer::new(60),
        LogAudio::default(),
        LogScoreLabel::default(),
    )?;
    game.set_idle_mode(true);

    let frames = (DEMO_SECONDS as f32 / SIM_DT).round() as u32;
    for _ in 0..frames {
        game.update(SIM_DT);
        game.render();
    }

    println!(
        "Demo finished after {}s: score {}, best {}, flaps {}",
        DEMO_SECONDS,
        game.round().score,
        game.label().best,
        game.audio().played
    );
    Ok(())
}
