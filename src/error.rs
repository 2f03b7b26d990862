//! Simulation error type
//!
//! Most edge cases in the sim are absorbed as no-ops (jumping while dead,
//! releasing a free slot). Only the cases a host may want to observe surface here.

use std::fmt;

#[derive(Debug)]
pub enum SimError {
    /// Every obstacle slot is active
    PoolExhausted { capacity: usize },
    /// Tuning document parsed but holds values the sim cannot run with
    InvalidTuning(String),
    /// Tuning document is not valid JSON for `Tuning`
    TuningParse(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::PoolExhausted { capacity } => {
                write!(f, "obstacle pool exhausted (all {} slots active)", capacity)
            }
            SimError::InvalidTuning(reason) => write!(f, "invalid tuning: {}", reason),
            SimError::TuningParse(err) => write!(f, "failed to parse tuning: {}", err),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::TuningParse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::TuningParse(err)
    }
}
