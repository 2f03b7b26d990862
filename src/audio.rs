//! Audio playback contract
//!
//! The sim never plays sound itself; the `Game` driver maps sim events to
//! `SoundEffect`s and hands them to whatever `AudioSink` the host provides.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player flapped
    Jump,
}

impl SoundEffect {
    /// Asset name the host loads for this effect
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
        }
    }
}

/// One-shot, fire-and-forget playback supplied by the host
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_asset_name() {
        assert_eq!(SoundEffect::Jump.asset_name(), "jump");
    }
}
