//! Bass drum with a falling pitch sweep.

use std::f64::consts::PI;

use crate::core::{NoteSynthesizer, is_audible, note_len, sample_time};
use crate::music::{Note, Tempo};

const START_FREQUENCY: f64 = 60.0;
const END_FREQUENCY: f64 = 40.0;
const DECAY_RATE: f64 = 5.0;

/// Kick drum: a sine sweeping from 60 Hz down to 40 Hz under `exp(-5t)`.
///
/// The sweep is stretched over the whole note, and the note's own pitch is
/// ignored except to tell sound from silence.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::BassDrum;
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::C, 2).unwrap(), NoteValue::Quarter);
/// let samples = BassDrum::<44100>::new().synthesize(&note, Tempo::new(120).unwrap(), 1.0);
/// assert_eq!(samples.len(), 22050);
/// assert!(samples.iter().all(|s| s.abs() <= 1.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BassDrum<const SAMPLE_RATE: u32>;

impl<const SAMPLE_RATE: u32> BassDrum<SAMPLE_RATE> {
    pub fn new() -> Self {
        Self
    }

    /// Swept frequency at `t` seconds into a note lasting `duration` seconds.
    fn frequency_at(t: f64, duration: f64) -> f64 {
        START_FREQUENCY + t * (END_FREQUENCY - START_FREQUENCY) / duration
    }
}

impl<const SAMPLE_RATE: u32> NoteSynthesizer<SAMPLE_RATE> for BassDrum<SAMPLE_RATE> {
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = vec![0.0; note_len::<SAMPLE_RATE>(note, tempo)];
        if !is_audible(note) {
            return samples;
        }

        let duration = f64::from(note.duration(tempo)) / 1000.0;
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            let frequency = Self::frequency_at(t, duration);
            *sample = volume * (-DECAY_RATE * t).exp() * (2.0 * PI * frequency * t).sin();
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
    fn test_sweep_endpoints() {
        assert_eq!(BassDrum::<44100>::frequency_at(0.0, 0.5), 60.0);
        assert!((BassDrum::<44100>::frequency_at(0.25, 0.5) - 50.0).abs() < EPSILON);
        assert!((BassDrum::<44100>::frequency_at(0.5, 0.5) - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_length_and_decay() {
        let drum = BassDrum::<44100>::new();
        let samples = drum.synthesize(&FakeNote::new(100.0, 1000), tempo(), 1.0);
        assert_eq!(samples.len(), 44100);
        assert_eq!(samples[0], 0.0);

        // Envelope bounds the signal
        for (i, s) in samples.iter().enumerate().step_by(97) {
            let t = i as f64 / 44100.0;
            assert!(s.abs() <= (-5.0 * t).exp() + EPSILON);
        }
    }

    #[test]
    fn test_pitch_does_not_matter() {
        let drum = BassDrum::<8000>::new();
        let low = drum.synthesize(&FakeNote::new(30.0, 200), tempo(), 0.8);
        let high = drum.synthesize(&FakeNote::new(3000.0, 200), tempo(), 0.8);
        assert_eq!(low, high);
    }

    #[test]
    fn test_zero_duration() {
        let drum = BassDrum::<44100>::new();
        assert!(drum.synthesize(&FakeNote::new(60.0, 0), tempo(), 1.0).is_empty());
    }

    #[test]
    fn test_silent_frequency() {
        let drum = BassDrum::<1000>::new();
        assert_eq!(
            drum.synthesize(&FakeNote::new(0.0, 100), tempo(), 1.0),
            vec![0.0; 100]
        );
    }
}
