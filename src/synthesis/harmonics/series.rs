//! Harmonic decorator with pluggable partial indices and amplitudes.

use std::f64::consts::PI;
use std::fmt;

use crate::core::{Error, NoteSynthesizer, Result, is_audible, sample_time};
use crate::music::{Note, Tempo};

/// Maps a harmonic number (starting at 1) to a frequency multiplier.
pub type IndexFn = Box<dyn Fn(u32) -> f64 + Send + Sync>;

/// Maps a harmonic number and a time in seconds to an amplitude.
pub type AmplitudeFn = Box<dyn Fn(u32, f64) -> f64 + Send + Sync>;

/// Replaces a signal with a custom series of partials.
///
/// For `N` partials, each sample becomes
/// `(volume / N) * Σ_{k=1..N} amplitude(k, t) * sin(2π * index(k) * frequency * t)`.
/// Non-integer indices give inharmonic spectra, and time-dependent
/// amplitudes let each partial decay at its own rate.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::{HarmonicSeries, PureSound};
///
/// // Odd harmonics falling off by a third each
/// let synth = HarmonicSeries::new(
///     PureSound::<44100>::new(),
///     5,
///     |k| f64::from(2 * k - 1),
///     |k, _t| 1.0 / 3.0_f64.powi(k as i32 - 1),
/// )
/// .unwrap();
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::D, 5).unwrap(), NoteValue::Eighth);
/// assert_eq!(synth.synthesize(&note, Tempo::new(120).unwrap(), 0.5).len(), 11025);
/// ```
pub struct HarmonicSeries<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> {
    source: S,
    count: u32,
    index: IndexFn,
    amplitude: AmplitudeFn,
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> HarmonicSeries<SAMPLE_RATE, S> {
    /// Wraps `source` with `count` partials.
    ///
    /// # Arguments
    ///
    /// * `source` - Synthesizer whose buffer length is reused
    /// * `count` - Number of partials (at least 1)
    /// * `index` - Frequency multiplier of partial `k`
    /// * `amplitude` - Amplitude of partial `k` at time `t` (seconds)
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHarmonicCount`] if `count` is zero.
    pub fn new(
        source: S,
        count: u32,
        index: impl Fn(u32) -> f64 + Send + Sync + 'static,
        amplitude: impl Fn(u32, f64) -> f64 + Send + Sync + 'static,
    ) -> Result<Self> {
        if count < 1 {
            return Err(Error::InvalidHarmonicCount {
                count: count as usize,
            });
        }
        Ok(Self {
            source,
            count,
            index: Box::new(index),
            amplitude: Box::new(amplitude),
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn inner(&self) -> &S {
        &self.source
    }
}

impl<const SAMPLE_RATE: u32, S> fmt::Debug for HarmonicSeries<SAMPLE_RATE, S>
where
    S: NoteSynthesizer<SAMPLE_RATE> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarmonicSeries")
            .field("source", &self.source)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> NoteSynthesizer<SAMPLE_RATE>
    for HarmonicSeries<SAMPLE_RATE, S>
{
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = self.source.synthesize(note, tempo, volume);
        if !is_audible(note) {
            samples.fill(0.0);
            return samples;
        }

        let frequency = note.frequency();
        // Partial multipliers do not depend on time
        let indices: Vec<f64> = (1..=self.count).map(|k| (self.index)(k)).collect();
        let gain = volume / f64::from(self.count);

        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            let partials: f64 = (1..=self.count)
                .zip(&indices)
                .map(|(k, &index)| (self.amplitude)(k, t) * (2.0 * PI * index * frequency * t).sin())
                .sum();
            *sample = gain * partials;
        }
        samples
    }
}
