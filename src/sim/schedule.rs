//! Explicit time-driven tasks
//!
//! The spawn cadence and the jump rotation are plain values advanced by
//! elapsed milliseconds rather than callbacks owned by a host loop. That keeps
//! cancellation deterministic and lets tests drive them without a frame loop.

use serde::{Deserialize, Serialize};

use crate::lerp;

/// Lifecycle of a repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    /// Created but not started
    Idle,
    /// Counting toward the next fire
    Armed,
    /// Stopped for good; never fires again
    Cancelled,
}

/// Repeating fixed-interval timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    interval_ms: f64,
    elapsed_ms: f64,
    state: TimerState,
}

impl Timer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            state: TimerState::Idle,
        }
    }

    /// Start counting from zero. A cancelled timer stays cancelled.
    pub fn arm(&mut self) {
        if self.state == TimerState::Idle {
            self.elapsed_ms = 0.0;
            self.state = TimerState::Armed;
        }
    }

    /// Stop the timer. Returns true if it was armed.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.state == TimerState::Armed;
        self.state = TimerState::Cancelled;
        was_armed
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Armed
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Milliseconds until the next fire (None unless armed)
    pub fn remaining_ms(&self) -> Option<f64> {
        self.is_armed().then(|| self.interval_ms - self.elapsed_ms)
    }

    /// Advance by `dt_ms` and return how many times the timer fired
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !self.is_armed() || self.interval_ms <= 0.0 {
            return 0;
        }

        self.elapsed_ms += dt_ms;
        let mut fired = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            fired += 1;
        }
        fired
    }
}

/// Linear interpolation of one scalar over a fixed duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_ms: f64,
    elapsed_ms: f64,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn value(&self) -> f32 {
        lerp(self.from, self.to, self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `dt_ms` and return the new value
    pub fn advance(&mut self, dt_ms: f64) -> f32 {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms.max(0.0));
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_never_fires() {
        let mut t = Timer::new(1500.0);
        assert_eq!(t.advance(10_000.0), 0);
        assert_eq!(t.state(), TimerState::Idle);
        assert_eq!(t.remaining_ms(), None);
    }

    #[test]
    fn test_timer_fires_on_interval() {
        let mut t = Timer::new(1500.0);
        t.arm();
        assert_eq!(t.advance(1000.0), 0);
        assert_eq!(t.remaining_ms(), Some(500.0));
        assert_eq!(t.advance(500.0), 1);
        assert_eq!(t.advance(3000.0), 2);
    }

    #[test]
    fn test_cancel_is_final() {
        let mut t = Timer::new(1500.0);
        t.arm();
        assert!(t.cancel());
        assert!(!t.cancel());
        t.arm();
        assert_eq!(t.advance(5000.0), 0);
        assert_eq!(t.state(), TimerState::Cancelled);
    }

    #[test]
    fn test_tween_interpolates_and_clamps() {
        let mut tw = Tween::new(10.0, -20.0, 100.0);
        assert_eq!(tw.value(), 10.0);
        assert_eq!(tw.advance(50.0), -5.0);
        assert!(!tw.is_finished());
        assert_eq!(tw.advance(80.0), -20.0);
        assert!(tw.is_finished());
    }

    #[test]
    fn test_zero_duration_tween_is_done() {
        let tw = Tween::new(0.0, 5.0, 0.0);
        assert!(tw.is_finished());
        assert_eq!(tw.value(), 5.0);
    }
}
