//! Xylophone with octave-spaced partials.

use std::f64::consts::PI;

use crate::core::{NoteSynthesizer, is_audible, note_len, sample_time};
use crate::music::{Note, Tempo};

const PARTIALS: i32 = 8;
const DECAY_RATE: f64 = 3.0;

/// Xylophone: partials at `2^i` times the note's pitch, `i` from 0 to 7.
///
/// Partial `i` is weighted `exp(-(2i + 1))`, so the fundamental dominates,
/// and the sum fades out under `exp(-3t)`.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::Xylophone;
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::G, 5).unwrap(), NoteValue::Eighth);
/// let samples = Xylophone::<44100>::new().synthesize(&note, Tempo::new(120).unwrap(), 0.8);
/// assert_eq!(samples.len(), 11025);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Xylophone<const SAMPLE_RATE: u32>;

impl<const SAMPLE_RATE: u32> Xylophone<SAMPLE_RATE> {
    pub fn new() -> Self {
        Self
    }
}

impl<const SAMPLE_RATE: u32> NoteSynthesizer<SAMPLE_RATE> for Xylophone<SAMPLE_RATE> {
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = vec![0.0; note_len::<SAMPLE_RATE>(note, tempo)];
        if !is_audible(note) {
            return samples;
        }

        let frequency = note.frequency();
        let partials: Vec<(f64, f64)> = (0..PARTIALS)
            .map(|i| (2.0_f64.powi(i) * frequency, (-f64::from(2 * i + 1)).exp()))
            .collect();

        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            let ring: f64 = partials
                .iter()
                .map(|&(f, weight)| weight * (2.0 * PI * f * t).sin())
                .sum();
            *sample = volume * (-DECAY_RATE * t).exp() * ring;
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeNote;

    const EPSILON: f64 = 1e-9;

    fn tempo() -> Tempo {
        Tempo::new(120).unwrap()
    }

    #[test]
    fn test_quarter_cycle_sample() {
        // 1 Hz at SR 4: t = 0.25 puts partial 0 at its peak and every octave above at a zero
        let samples = Xylophone::<4>::new().synthesize(&FakeNote::new(1.0, 1000), tempo(), 1.0);
        assert_eq!(samples.len(), 4);
        let expected = (-0.75_f64).exp() * (-1.0_f64).exp();
        assert!((samples[1] - expected).abs() < EPSILON);
    }

    #[test]
    fn test_follows_pitch() {
        let xylophone = Xylophone::<44100>::new();
        let a = xylophone.synthesize(&FakeNote::new(440.0, 100), tempo(), 1.0);
        let b = xylophone.synthesize(&FakeNote::new(880.0, 100), tempo(), 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_silent_frequency() {
        let samples = Xylophone::<1000>::new().synthesize(&FakeNote::new(0.0, 30), tempo(), 1.0);
        assert_eq!(samples, vec![0.0; 30]);
    }
}
