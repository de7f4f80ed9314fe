//! Snare drum built from enveloped white noise.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::strike_envelope;
use crate::core::{NoteSynthesizer, is_audible, note_len, sample_time};
use crate::music::{Note, Tempo};

/// Attack time in seconds.
const ATTACK: f64 = 0.01;
const DECAY_RATE: f64 = 15.0;

/// Snare drum: uniform noise under a 10 ms attack and a fast `exp(-15t)` decay.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::SnareDrum;
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::D, 3).unwrap(), NoteValue::Eighth);
/// let snare = SnareDrum::<44100>::new();
/// let samples = snare.synthesize(&note, Tempo::new(120).unwrap(), 0.7);
/// assert_eq!(samples.len(), 11025);
/// assert!(samples.iter().all(|s| s.abs() <= 0.7));
/// ```
#[derive(Debug)]
pub struct SnareDrum<const SAMPLE_RATE: u32, R: Rng = StdRng> {
    rng: Mutex<R>,
}

impl<const SAMPLE_RATE: u32> SnareDrum<SAMPLE_RATE, StdRng> {
    /// Creates a snare seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<const SAMPLE_RATE: u32> Default for SnareDrum<SAMPLE_RATE, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> SnareDrum<SAMPLE_RATE, R> {
    /// Creates a snare drawing its noise from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<const SAMPLE_RATE: u32, R: Rng + Send> NoteSynthesizer<SAMPLE_RATE> for SnareDrum<SAMPLE_RATE, R> {
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = vec![0.0; note_len::<SAMPLE_RATE>(note, tempo)];
        if !is_audible(note) {
            return samples;
        }

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            let noise: f64 = rng.gen_range(-1.0..=1.0);
            *sample = volume * strike_envelope(t, ATTACK, DECAY_RATE) * noise;
        }
        samples
    }
}
