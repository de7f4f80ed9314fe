//! Vibrato effect using an additive low-frequency sine.

use std::f64::consts::PI;

use crate::core::{NoteSynthesizer, Result, is_audible, non_negative, sample_time};
use crate::music::{Note, Tempo};

/// Vibrato effect that superimposes a slow sine on the wrapped signal.
///
/// Each sample becomes `sample + depth * sin(2π * speed * t)`. The wrapped
/// signal is otherwise left intact, so small depths (around 0.01) give a
/// gentle wobble on top of the note.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::{PureSound, Vibrato};
///
/// // 5 Hz wobble with a depth of 0.01
/// let synth = Vibrato::new(PureSound::<44100>::new(), 0.01, 5.0).unwrap();
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::E, 4).unwrap(), NoteValue::Half);
/// assert_eq!(synth.synthesize(&note, Tempo::new(120).unwrap(), 0.5).len(), 44100);
/// ```
#[derive(Debug, Clone)]
pub struct Vibrato<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> {
    source: S,
    depth: f64,
    speed: f64,
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> Vibrato<SAMPLE_RATE, S> {
    /// Creates a new vibrato effect.
    ///
    /// # Arguments
    ///
    /// * `source` - Synthesizer to modulate
    /// * `depth` - Amplitude of the added sine
    /// * `speed` - Frequency of the added sine in Hz (typically 3-6 Hz)
    ///
    /// # Errors
    ///
    /// [`Error::NegativeParameter`](crate::core::Error::NegativeParameter)
    /// if `depth` or `speed` is negative.
    pub fn new(source: S, depth: f64, speed: f64) -> Result<Self> {
        Ok(Self {
            source,
            depth: non_negative("depth", depth)?,
            speed: non_negative("speed", speed)?,
        })
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn inner(&self) -> &S {
        &self.source
    }
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> NoteSynthesizer<SAMPLE_RATE>
    for Vibrato<SAMPLE_RATE, S>
{
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = self.source.synthesize(note, tempo, volume);
        if !is_audible(note) {
            samples.fill(0.0);
            return samples;
        }

        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            *sample += self.depth * (2.0 * PI * self.speed * t).sin();
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::core::testing::{ConstantSynth, FakeNote};
    use crate::synthesis::PureSound;

    const EPSILON: f64 = 1e-9;

    fn tempo() -> Tempo {
        Tempo::new(120).unwrap()
    }

    #[test]
    fn test_rejects_negative_parameters() {
        let source = PureSound::<44100>::new();
        assert!(matches!(
            Vibrato::new(source, -0.1, 5.0),
            Err(Error::NegativeParameter { name: "depth", .. })
        ));
        assert!(matches!(
            Vibrato::new(source, 0.1, -5.0),
            Err(Error::NegativeParameter { name: "speed", .. })
        ));
    }

    #[test]
    fn test_adds_low_frequency_sine() {
        // 1 Hz vibrato sampled at 4 Hz over a constant 0.5
        let synth = Vibrato::new(ConstantSynth::<4>::new(0.5), 0.25, 1.0).unwrap();
        let samples = synth.synthesize(&FakeNote::new(440.0, 1000), tempo(), 1.0);
        assert_eq!(samples.len(), 4);
        assert!((samples[0] - 0.5).abs() < EPSILON);
        assert!((samples[1] - 0.75).abs() < EPSILON);
        assert!((samples[2] - 0.5).abs() < EPSILON);
        assert!((samples[3] - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_zero_depth_is_transparent() {
        let note = FakeNote::new(440.0, 100);
        let pure = PureSound::<44100>::new();
        let synth = Vibrato::new(pure, 0.0, 5.0).unwrap();
        assert_eq!(
            synth.synthesize(&note, tempo(), 0.7),
            pure.synthesize(&note, tempo(), 0.7)
        );
    }

    #[test]
    fn test_silent_frequency() {
        let synth = Vibrato::new(ConstantSynth::<1000>::new(0.0), 0.5, 5.0).unwrap();
        let samples = synth.synthesize(&FakeNote::new(0.0, 300), tempo(), 1.0);
        assert_eq!(samples, vec![0.0; 300]);
    }
}
