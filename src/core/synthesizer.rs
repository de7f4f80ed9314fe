//! The note synthesis capability shared by every strategy.
//!
//! A synthesizer turns one [`Note`] into a freshly allocated buffer of
//! amplitude samples. The sample rate is part of the type, so every stage of
//! a pipeline is guaranteed to agree on it.

use std::sync::Arc;

use crate::music::{Note, Tempo};

/// Sample rate used when none is given explicitly (CD quality).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Common interface for everything that can render a note into samples.
///
/// Implementations must return exactly [`note_len`] samples for the given
/// note and tempo, and a zero-filled buffer of that length whenever the
/// note's frequency is zero or negative.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
///
/// # Examples
///
/// ```
/// use staffsynth::core::{NoteSynthesizer, note_len};
/// use staffsynth::music::{Note, Tempo};
///
/// /// Renders a constant level, ignoring pitch.
/// struct Level(f64);
///
/// impl NoteSynthesizer<8000> for Level {
///     fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
///         vec![self.0 * volume; note_len::<8000>(note, tempo)]
///     }
/// }
///
/// assert_eq!(Level(1.0).sample_rate(), 8000.0);
/// ```
pub trait NoteSynthesizer<const SAMPLE_RATE: u32>: Send + Sync {
    /// Renders `note` at `tempo` and `volume` (0.0 to 1.0).
    ///
    /// # Returns
    ///
    /// A buffer of samples, nominally between -1.0 and 1.0
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64>;

    /// Gets the sample rate this synthesizer renders at.
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }
}

impl<const SAMPLE_RATE: u32, S> NoteSynthesizer<SAMPLE_RATE> for Box<S>
where
    S: NoteSynthesizer<SAMPLE_RATE> + ?Sized,
{
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        (**self).synthesize(note, tempo, volume)
    }
}

impl<const SAMPLE_RATE: u32, S> NoteSynthesizer<SAMPLE_RATE> for Arc<S>
where
    S: NoteSynthesizer<SAMPLE_RATE> + ?Sized,
{
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        (**self).synthesize(note, tempo, volume)
    }
}

/// Number of samples covering `duration_ms` milliseconds.
///
/// # Examples
///
/// ```
/// use staffsynth::core::sample_count;
///
/// assert_eq!(sample_count(500, 44100), 22050);
/// assert_eq!(sample_count(0, 44100), 0);
/// ```
pub fn sample_count(duration_ms: u32, sample_rate: u32) -> usize {
    (duration_ms as f64 / 1000.0 * sample_rate as f64).round() as usize
}

/// Buffer length for `note` played at `tempo`.
pub fn note_len<const SAMPLE_RATE: u32>(note: &dyn Note, tempo: Tempo) -> usize {
    sample_count(note.duration(tempo), SAMPLE_RATE)
}

/// Time in seconds of the sample at `index`.
pub fn sample_time<const SAMPLE_RATE: u32>(index: usize) -> f64 {
    index as f64 / SAMPLE_RATE as f64
}

/// Whether `note` produces sound at all; rests and invalid pitches do not.
pub(crate) fn is_audible(note: &dyn Note) -> bool {
    note.frequency() > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{ConstantSynth, FakeNote};

    #[test]
    fn test_sample_count_rounds() {
        assert_eq!(sample_count(250, 44100), 11025);
        // 1 ms at 44.1 kHz is 44.1 samples
        assert_eq!(sample_count(1, 44100), 44);
        // 1 ms at 22.05 kHz is 22.05 samples
        assert_eq!(sample_count(1, 22050), 22);
        assert_eq!(sample_count(3, 500), 2);
    }

    #[test]
    fn test_sample_time() {
        assert_eq!(sample_time::<44100>(0), 0.0);
        assert_eq!(sample_time::<44100>(44100), 1.0);
        assert_eq!(sample_time::<1000>(250), 0.25);
    }

    #[test]
    fn test_note_len() {
        let note = FakeNote::new(440.0, 500);
        assert_eq!(note_len::<44100>(&note, Tempo::new(120).unwrap()), 22050);
    }

    #[test]
    fn test_is_audible() {
        assert!(is_audible(&FakeNote::new(440.0, 10)));
        assert!(!is_audible(&FakeNote::new(0.0, 10)));
        assert!(!is_audible(&FakeNote::new(-3.0, 10)));
    }

    #[test]
    fn test_boxed_and_shared_forward() {
        let note = FakeNote::new(440.0, 10);
        let tempo = Tempo::new(60).unwrap();

        let boxed: Box<dyn NoteSynthesizer<1000>> = Box::new(ConstantSynth::<1000>::new(0.25));
        assert_eq!(boxed.synthesize(&note, tempo, 1.0), vec![0.25; 10]);

        let shared: Arc<dyn NoteSynthesizer<1000>> = Arc::new(ConstantSynth::<1000>::new(0.5));
        assert_eq!(shared.synthesize(&note, tempo, 1.0), vec![0.5; 10]);
        assert_eq!(shared.sample_rate(), 1000.0);
    }
}
