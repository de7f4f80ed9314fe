//! White noise decorator.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{NoteSynthesizer, Result, is_audible, non_negative};
use crate::music::{Note, Tempo};

/// Adds uniform white noise to a wrapped signal.
///
/// Each sample gets an independent value drawn uniformly from
/// `[-amplitude, amplitude]`. The generator sits behind a mutex so one
/// instance can be shared by every track that uses it.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::{PureSound, WhiteNoise};
///
/// let breathy = WhiteNoise::new(PureSound::<44100>::new(), 0.003).unwrap();
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::A, 5).unwrap(), NoteValue::Sixteenth);
/// let samples = breathy.synthesize(&note, Tempo::new(120).unwrap(), 0.5);
/// assert_eq!(samples.len(), 5513);
/// ```
#[derive(Debug)]
pub struct WhiteNoise<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>, R: Rng = StdRng> {
    source: S,
    amplitude: f64,
    rng: Mutex<R>,
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> WhiteNoise<SAMPLE_RATE, S, StdRng> {
    /// Creates a new white noise decorator seeded from system entropy.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeParameter`](crate::core::Error::NegativeParameter)
    /// if `amplitude` is negative.
    pub fn new(source: S, amplitude: f64) -> Result<Self> {
        Self::with_rng(source, amplitude, StdRng::from_entropy())
    }
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>, R: Rng> WhiteNoise<SAMPLE_RATE, S, R> {
    /// Creates a new white noise decorator with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use staffsynth::synthesis::{PureSound, WhiteNoise};
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let noise = WhiteNoise::with_rng(PureSound::<44100>::new(), 0.01, rng).unwrap();
    /// assert_eq!(noise.amplitude(), 0.01);
    /// ```
    pub fn with_rng(source: S, amplitude: f64, rng: R) -> Result<Self> {
        Ok(Self {
            source,
            amplitude: non_negative("amplitude", amplitude)?,
            rng: Mutex::new(rng),
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn inner(&self) -> &S {
        &self.source
    }
}

impl<const SAMPLE_RATE: u32, S, R> NoteSynthesizer<SAMPLE_RATE> for WhiteNoise<SAMPLE_RATE, S, R>
where
    S: NoteSynthesizer<SAMPLE_RATE>,
    R: Rng + Send,
{
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = self.source.synthesize(note, tempo, volume);
        if !is_audible(note) {
            samples.fill(0.0);
            return samples;
        }
        if self.amplitude == 0.0 {
            return samples;
        }

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        for sample in &mut samples {
            *sample += rng.gen_range(-1.0..=1.0) * self.amplitude;
        }
        samples
    }
}
