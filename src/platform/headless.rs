//! Log-backed host services for running without a window
//!
//! Used by the native binary's demo run. Nothing is drawn or played; each
//! service reports what it would have done through `log`.

use super::{Renderer, ScoreLabel};
use crate::audio::{AudioSink, SoundEffect};
use crate::consts::BACKGROUND_COLOR;
use crate::sim::Round;

/// Logs a one-line summary of the round every `every_n_frames` draws
#[derive(Debug)]
pub struct LogRenderer {
    every_n_frames: u64,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every_n_frames: u64) -> Self {
        Self {
            every_n_frames: every_n_frames.max(1),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, round: &Round) {
        if self.frames == 0 {
            log::debug!("Clear colour #{:06x}", BACKGROUND_COLOR);
        }
        if self.frames % self.every_n_frames == 0 {
            log::debug!(
                "frame {}: {:?} player=({:.0}, {:.0}) angle={:.1} pipes={} score={}",
                self.frames,
                round.phase,
                round.player.pos.x,
                round.player.pos.y,
                round.player.angle,
                round.pool.active_count(),
                round.score
            );
        }
        self.frames += 1;
    }
}

/// Counts and logs sounds instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: u32,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played += 1;
        log::trace!("play '{}'", effect.asset_name());
    }
}

/// Remembers the last score and the best seen this session
#[derive(Debug, Default)]
pub struct LogScoreLabel {
    pub score: u32,
    pub best: u32,
}

impl ScoreLabel for LogScoreLabel {
    fn set_score(&mut self, score: u32) {
        self.score = score;
        if score > self.best {
            self.best = score;
            log::info!("New best: {}", score);
        }
    }
}
