//! Fire-and-forget audio trigger seam.
//!
//! The core never waits on sound: it emits triggers and moves on. The
//! terminal build installs [`NullAudio`]; tests can install a recorder.

/// One-shot sound effects the engines can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Attack,
    Damage,
    Win,
    Fail,
}

pub trait AudioSink {
    /// Speak a vocabulary word aloud (text-to-speech on capable frontends).
    fn speak(&mut self, word: &str);
    /// Play a one-shot effect.
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every trigger.
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn speak(&mut self, _word: &str) {}
    fn play(&mut self, _effect: SoundEffect) {}
}
