//! Test doubles shared by the unit tests.

use crate::core::{NoteSynthesizer, note_len};
use crate::music::{Note, Tempo};

/// A note with a fixed frequency and a fixed duration at any tempo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FakeNote {
    frequency: f64,
    duration_ms: u32,
}

impl FakeNote {
    pub(crate) fn new(frequency: f64, duration_ms: u32) -> Self {
        Self {
            frequency,
            duration_ms,
        }
    }
}

impl Note for FakeNote {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn duration(&self, _tempo: Tempo) -> u32 {
        self.duration_ms
    }
}

/// Renders a constant level for the full note length, ignoring pitch and volume.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ConstantSynth<const SAMPLE_RATE: u32> {
    level: f64,
}

impl<const SAMPLE_RATE: u32> ConstantSynth<SAMPLE_RATE> {
    pub(crate) fn new(level: f64) -> Self {
        Self { level }
    }
}

impl<const SAMPLE_RATE: u32> NoteSynthesizer<SAMPLE_RATE> for ConstantSynth<SAMPLE_RATE> {
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, _volume: f64) -> Vec<f64> {
        vec![self.level; note_len::<SAMPLE_RATE>(note, tempo)]
    }
}
