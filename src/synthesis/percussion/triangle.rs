//! Orchestral triangle with fixed inharmonic partials.

use std::f64::consts::PI;

use crate::core::{NoteSynthesizer, is_audible, note_len, sample_time};
use crate::music::{Note, Tempo};

const PARTIALS: u32 = 8;
const DECAY_RATE: f64 = 2.0;

/// Triangle: eight high partials that do not depend on the note's pitch.
///
/// Partial `j` (1 to 8) rings at `2 * (2000 + 800j)` Hz with weight
/// `exp(-5 * (0.5 + 0.3j))`; the sum fades out under `exp(-2t)`.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::Triangle;
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::C, 6).unwrap(), NoteValue::Quarter);
/// let samples = Triangle::<44100>::new().synthesize(&note, Tempo::new(120).unwrap(), 1.0);
/// assert_eq!(samples.len(), 22050);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangle<const SAMPLE_RATE: u32>;

impl<const SAMPLE_RATE: u32> Triangle<SAMPLE_RATE> {
    pub fn new() -> Self {
        Self
    }

    /// Frequency and weight of every partial.
    fn partials() -> impl Iterator<Item = (f64, f64)> {
        (1..=PARTIALS).map(|j| {
            let j = f64::from(j);
            let frequency = 2.0 * (2000.0 + 800.0 * j);
            let weight = (-5.0 * (0.5 + 0.3 * j)).exp();
            (frequency, weight)
        })
    }
}

impl<const SAMPLE_RATE: u32> NoteSynthesizer<SAMPLE_RATE> for Triangle<SAMPLE_RATE> {
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = vec![0.0; note_len::<SAMPLE_RATE>(note, tempo)];
        if !is_audible(note) {
            return samples;
        }

        let partials: Vec<(f64, f64)> = Self::partials().collect();
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            let ring: f64 = partials
                .iter()
                .map(|&(frequency, weight)| weight * (2.0 * PI * frequency * t).sin())
                .sum();
            *sample = volume * (-DECAY_RATE * t).exp() * ring;
        }
        samples
    }
}
