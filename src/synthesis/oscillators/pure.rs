//! Pure sine tone, the base of most instrument pipelines.

use std::f64::consts::PI;

use crate::core::{NoteSynthesizer, is_audible, note_len, sample_time};
use crate::music::{Note, Tempo};

/// Renders a note as a single sine wave at its frequency.
///
/// `sample[i] = volume * sin(2π * frequency * i / SAMPLE_RATE)`
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::PureSound;
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::A, 4).unwrap(), NoteValue::Quarter);
///
/// let samples = PureSound::<44100>::new().synthesize(&note, Tempo::new(120).unwrap(), 0.5);
/// assert_eq!(samples.len(), 22050);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PureSound<const SAMPLE_RATE: u32>;

impl<const SAMPLE_RATE: u32> PureSound<SAMPLE_RATE> {
    pub fn new() -> Self {
        Self
    }
}

impl<const SAMPLE_RATE: u32> NoteSynthesizer<SAMPLE_RATE> for PureSound<SAMPLE_RATE> {
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = vec![0.0; note_len::<SAMPLE_RATE>(note, tempo)];
        if !is_audible(note) {
            return samples;
        }

        let frequency = note.frequency();
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            *sample = volume * (2.0 * PI * frequency * t).sin();
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
    fn test_buffer_length() {
        let samples = PureSound::<44100>::new().synthesize(&FakeNote::new(440.0, 500), tempo(), 1.0);
        assert_eq!(samples.len(), 22050);
    }

    #[test]
    fn test_starts_at_zero() {
        let samples = PureSound::<44100>::new().synthesize(&FakeNote::new(440.0, 10), tempo(), 1.0);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn test_follows_sine() {
        // 1 Hz at 4 samples per second hits the quarter points of the cycle
        let samples = PureSound::<4>::new().synthesize(&FakeNote::new(1.0, 1000), tempo(), 0.5);
        assert_eq!(samples.len(), 4);
        assert!(samples[0].abs() < EPSILON);
        assert!((samples[1] - 0.5).abs() < EPSILON);
        assert!(samples[2].abs() < EPSILON);
        assert!((samples[3] + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_sample_range() {
        let samples = PureSound::<44100>::new().synthesize(&FakeNote::new(440.0, 100), tempo(), 0.8);
        for sample in samples {
            assert!((-0.8..=0.8).contains(&sample));
        }
    }

    #[test]
    fn test_zero_duration() {
        let samples = PureSound::<44100>::new().synthesize(&FakeNote::new(440.0, 0), tempo(), 1.0);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_silent_frequency_keeps_length() {
        for frequency in [0.0, -220.0] {
            let samples =
                PureSound::<44100>::new().synthesize(&FakeNote::new(frequency, 100), tempo(), 1.0);
            assert_eq!(samples.len(), 4410);
            assert!(samples.iter().all(|&s| s == 0.0));
        }
    }
}
