//! Additive overtone decorator.

use std::f64::consts::PI;

use crate::core::{Error, NoteSynthesizer, Result, is_audible, sample_time};
use crate::music::{Note, Tempo};

/// Replaces a signal with a stack of overtones above the note's frequency.
///
/// For `N` harmonics, each sample becomes
/// `(volume / N) * Σ_{k=2..N} sin(2π * k * frequency * t) / √k`.
/// The wrapped synthesizer only decides the buffer length; the fundamental
/// (`k = 1`) is never added by this stage, so with `N = 1` the output is
/// silent.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::{Harmonics, PureSound};
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::A, 4).unwrap(), NoteValue::Quarter);
///
/// let synth = Harmonics::new(PureSound::<44100>::new(), 8).unwrap();
/// let samples = synth.synthesize(&note, Tempo::new(120).unwrap(), 0.5);
/// assert_eq!(samples.len(), 22050);
///
/// assert!(Harmonics::new(PureSound::<44100>::new(), 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Harmonics<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> {
    source: S,
    count: usize,
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> Harmonics<SAMPLE_RATE, S> {
    /// Wraps `source` with `count` harmonics.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHarmonicCount`] if `count` is zero.
    pub fn new(source: S, count: usize) -> Result<Self> {
        if count < 1 {
            return Err(Error::InvalidHarmonicCount { count });
        }
        Ok(Self { source, count })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn inner(&self) -> &S {
        &self.source
    }
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> NoteSynthesizer<SAMPLE_RATE>
    for Harmonics<SAMPLE_RATE, S>
{
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = self.source.synthesize(note, tempo, volume);
        if !is_audible(note) {
            samples.fill(0.0);
            return samples;
        }

        let frequency = note.frequency();
        let gain = volume / self.count as f64;
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            let overtones: f64 = (2..=self.count)
                .map(|k| {
                    let k = k as f64;
                    (2.0 * PI * k * frequency * t).sin() / k.sqrt()
                })
                .sum();
            *sample = gain * overtones;
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{ConstantSynth, FakeNote};
    use crate::synthesis::PureSound;

    const EPSILON: f64 = 1e-9;

    fn tempo() -> Tempo {
        Tempo::new(120).unwrap()
    }

    #[test]
    fn test_zero_harmonics_rejected() {
        assert!(matches!(
            Harmonics::new(PureSound::<44100>::new(), 0),
            Err(Error::InvalidHarmonicCount { count: 0 })
        ));
    }

    #[test]
    fn test_length_matches_source() {
        let note = FakeNote::new(440.0, 500);
        let single = Harmonics::new(PureSound::<44100>::new(), 1).unwrap();
        let many = Harmonics::new(PureSound::<44100>::new(), 10).unwrap();
        let a = single.synthesize(&note, tempo(), 0.5);
        let b = many.synthesize(&note, tempo(), 0.5);
        assert_eq!(a.len(), 22050);
        assert_eq!(a.len(), b.len());
        assert_ne!(a[1000], b[1000]);
    }

    #[test]
    fn test_single_harmonic_is_silent() {
        let synth = Harmonics::new(PureSound::<44100>::new(), 1).unwrap();
        let samples = synth.synthesize(&FakeNote::new(440.0, 50), tempo(), 1.0);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_replaces_source_signal() {
        // 1 Hz, 2 harmonics, sampled at 8 Hz: only the 2 Hz overtone remains
        let synth = Harmonics::new(ConstantSynth::<8>::new(7.0), 2).unwrap();
        let samples = synth.synthesize(&FakeNote::new(1.0, 1000), tempo(), 1.0);
        assert_eq!(samples.len(), 8);
        let expected = 0.5 / 2.0_f64.sqrt();
        assert!(samples[0].abs() < EPSILON);
        assert!((samples[1] - expected).abs() < EPSILON);
        assert!((samples[3] + expected).abs() < EPSILON);
    }

    #[test]
    fn test_silent_frequency() {
        let synth = Harmonics::new(ConstantSynth::<1000>::new(1.0), 4).unwrap();
        let samples = synth.synthesize(&FakeNote::new(0.0, 20), tempo(), 1.0);
        assert_eq!(samples, vec![0.0; 20]);
    }
}
