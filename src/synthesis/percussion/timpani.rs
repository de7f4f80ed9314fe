//! Pitched kettle drum.

use std::f64::consts::PI;

use crate::core::{NoteSynthesizer, is_audible, note_len, sample_time};
use crate::music::{Note, Tempo};

const DECAY_RATE: f64 = 5.0;
/// Fraction of the struck pitch reached at the end of the note.
const END_RATIO: f64 = 0.6;

/// Timpani: a sine gliding from the note's pitch down to 60% of it under `exp(-5t)`.
///
/// Synthesis stops as soon as the swept frequency reaches zero; the rest of
/// the buffer stays silent.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::Timpani;
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::F, 2).unwrap(), NoteValue::Half);
/// let samples = Timpani::<44100>::new().synthesize(&note, Tempo::new(60).unwrap(), 0.9);
/// assert_eq!(samples.len(), 88200);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Timpani<const SAMPLE_RATE: u32>;

impl<const SAMPLE_RATE: u32> Timpani<SAMPLE_RATE> {
    pub fn new() -> Self {
        Self
    }
}

impl<const SAMPLE_RATE: u32> NoteSynthesizer<SAMPLE_RATE> for Timpani<SAMPLE_RATE> {
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = vec![0.0; note_len::<SAMPLE_RATE>(note, tempo)];
        if !is_audible(note) {
            return samples;
        }

        let start = note.frequency();
        let duration = f64::from(note.duration(tempo)) / 1000.0;
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = sample_time::<SAMPLE_RATE>(i);
            let frequency = start + t * (END_RATIO * start - start) / duration;
            if frequency <= 0.0 {
                break;
            }
            *sample = volume * (-DECAY_RATE * t).exp() * (2.0 * PI * frequency * t).sin();
        }
        samples
    }
}
