//! Crash cymbal built from ring-modulated noise.

use std::f64::consts::PI;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::strike_envelope;
use crate::core::{NoteSynthesizer, is_audible, note_len, sample_time};
use crate::music::{Note, Tempo};

/// Attack time in seconds.
const ATTACK: f64 = 0.01;
/// Decay time constant in seconds.
const DECAY: f64 = 0.2;
/// Frequency of the ring-modulating sine in Hz.
const SHIMMER_FREQUENCY: f64 = 2000.0;

/// Cymbal: uniform noise multiplied by a 2 kHz sine, under a 10 ms attack
/// and a slow `exp(-t / 0.2)` decay.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::Cymbal;
///
/// let cymbal = Cymbal::<44100>::with_rng(rand::rngs::StdRng::seed_from_u64(1));
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::A, 5).unwrap(), NoteValue::Whole);
/// let samples = cymbal.synthesize(&note, Tempo::new(120).unwrap(), 0.6);
/// assert_eq!(samples.len(), 88200);
/// ```
#[derive(Debug)]
pub struct Cymbal<const SAMPLE_RATE: u32, R: Rng = StdRng> {
    rng: Mutex<R>,
}

impl<const SAMPLE_RATE: u32> Cymbal<SAMPLE_RATE, StdRng> {
    /// Creates a cymbal seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<const SAMPLE_RATE: u32> Default for Cymbal<SAMPLE_RATE, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> Cymbal<SAMPLE_RATE, R> {
    /// Creates a cymbal drawing its noise from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<const SAMPLE_RATE: u32, R: Rng + Send> NoteSynthesizer<SAMPLE_RATE> for Cymbal<SAMPLE_RATE, R> {
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = vec![0.0; note_len::<SAMPLE_RATE>(note, tempo)];
        if !is_audible(note) {
            return samples;
        }

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            let noise: f64 = rng.gen_range(-1.0..=1.0);
            let shimmer = (2.0 * PI * SHIMMER_FREQUENCY * t).sin();
            *sample = volume * strike_envelope(t, ATTACK, 1.0 / DECAY) * noise * shimmer;
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeNote;

    const EPSILON: f64 = 1e-12;

    fn tempo() -> Tempo {
        Tempo::new(120).unwrap()
    }

    fn seeded() -> Cymbal<8000> {
        Cymbal::with_rng(StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_bounded_by_envelope() {
        let samples = seeded().synthesize(&FakeNote::new(880.0, 1000), tempo(), 0.8);
        assert_eq!(samples.len(), 8000);
        for (i, s) in samples.iter().enumerate() {
            let t = i as f64 / 8000.0;
            assert!(s.abs() <= 0.8 * strike_envelope(t, ATTACK, 1.0 / DECAY) + EPSILON);
        }
    }

    #[test]
    fn test_shimmer_nulls() {
        // At 8 kHz every fourth sample lands on a zero of the 2 kHz sine
        let samples = seeded().synthesize(&FakeNote::new(880.0, 100), tempo(), 1.0);
        for s in samples.iter().step_by(4) {
            assert!(s.abs() < 1e-9);
        }
    }

    #[test]
    fn test_rings_longer_than_snare() {
        let samples = seeded().synthesize(&FakeNote::new(880.0, 1000), tempo(), 1.0);
        // Still audible half a second in
        assert!(samples[4000..4400].iter().any(|s| s.abs() > 0.01));
    }

    #[test]
    fn test_silent_frequency() {
        let samples = seeded().synthesize(&FakeNote::new(0.0, 25), tempo(), 1.0);
        assert_eq!(samples, vec![0.0; 200]);
    }
}
