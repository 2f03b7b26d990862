//! Fixed-timestep driver
//!
//! Owns the current `Round` and the host services. The host calls `update`
//! with wall-clock frame time; the driver runs as many 60 Hz sim ticks as fit,
//! then forwards the round's events to audio and the score label.

use crate::audio::{AudioSink, SoundEffect};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::platform::{Renderer, ScoreLabel};
use crate::sim::{GameEvent, Round, TickInput, tick};
use crate::{SimError, Tuning};

/// Game instance holding all state
pub struct Game<R: Renderer, A: AudioSink, L: ScoreLabel> {
    round: Round,
    input: TickInput,
    accumulator: f32,
    renderer: R,
    audio: A,
    label: L,
}

impl<R: Renderer, A: AudioSink, L: ScoreLabel> Game<R, A, L> {
    pub fn new(
        tuning: Tuning,
        seed: u64,
        renderer: R,
        audio: A,
        mut label: L,
    ) -> Result<Self, SimError> {
        let round = Round::new(tuning, seed)?;
        label.set_score(0);
        Ok(Self {
            round,
            input: TickInput::default(),
            accumulator: 0.0,
            renderer,
            audio,
            label,
        })
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Key-press edge for the flap key
    pub fn press_jump(&mut self) {
        self.input.jump = true;
    }

    pub fn request_restart(&mut self) {
        self.input.restart = true;
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
    }

    /// Run simulation ticks for `dt` seconds of frame time.
    /// Returns the number of ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.clone();
            tick(&mut self.round, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.jump = false;
            self.input.restart = false;

            self.dispatch_events();
        }

        substeps
    }

    /// Render the current frame
    pub fn render(&mut self) {
        self.renderer.draw(&self.round);
    }

    fn dispatch_events(&mut self) {
        for event in self.round.drain_events() {
            match event {
                GameEvent::Jumped => self.audio.play(SoundEffect::Jump),
                GameEvent::ScoreChanged(score) => self.label.set_score(score),
                GameEvent::Restarted { final_score } => {
                    log::info!("Round over with score {}", final_score);
                    self.label.set_score(0);
                }
                GameEvent::PipeHit { .. }
                | GameEvent::RowSpawned { .. }
                | GameEvent::PoolExhausted => {}
            }
        }
    }
}
