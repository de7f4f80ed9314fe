//! Sequential rendering of one instrument's notes.

use log::{debug, trace};

use super::pcm::to_pcm16;
use crate::core::{DEFAULT_SAMPLE_RATE, NoteSynthesizer};
use crate::music::{Note, Tempo};

/// Volume used unless a renderer is told otherwise.
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Renders a sequence of notes back to back into one buffer.
///
/// Each note is synthesized on its own and appended to the output. Notes
/// never overlap and are not cross-faded.
///
/// # Examples
///
/// ```
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Rest, Tempo};
/// use staffsynth::render::TrackRenderer;
/// use staffsynth::synthesis::PureSound;
///
/// let table = PitchTable::new();
/// let notes = [
///     PitchedNote::new(table.get(PitchClass::C, 4).unwrap(), NoteValue::Quarter),
///     PitchedNote::new(table.get(PitchClass::E, 4).unwrap(), NoteValue::Quarter),
/// ];
///
/// let renderer = TrackRenderer::<44100>::new(Tempo::new(120).unwrap());
/// let samples = renderer.render(&notes, &PureSound::new());
/// assert_eq!(samples.len(), 44100);
///
/// let pcm = renderer.render_pcm(&notes, &PureSound::new());
/// assert_eq!(pcm.len(), 2 * 44100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRenderer<const SAMPLE_RATE: u32 = DEFAULT_SAMPLE_RATE> {
    tempo: Tempo,
    volume: f64,
}

impl<const SAMPLE_RATE: u32> TrackRenderer<SAMPLE_RATE> {
    /// Creates a renderer playing at `tempo` and the default volume.
    pub fn new(tempo: Tempo) -> Self {
        Self {
            tempo,
            volume: DEFAULT_VOLUME,
        }
    }

    /// Sets the volume passed to the synthesizer (0.0 to 1.0).
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Renders `notes` in order with `synthesizer`.
    ///
    /// # Returns
    ///
    /// The concatenated samples of every note
    pub fn render<N, S>(&self, notes: &[N], synthesizer: &S) -> Vec<f64>
    where
        N: Note,
        S: NoteSynthesizer<SAMPLE_RATE> + ?Sized,
    {
        let mut samples = Vec::new();
        for (i, note) in notes.iter().enumerate() {
            let rendered = synthesizer.synthesize(note, self.tempo, self.volume);
            trace!("note {}: {:?} -> {} samples", i, note, rendered.len());
            samples.extend(rendered);
        }
        debug!(
            "rendered {} notes into {} samples at {}",
            notes.len(),
            samples.len(),
            self.tempo
        );
        samples
    }

    /// Renders `notes` and quantizes the result to 16-bit little-endian PCM.
    pub fn render_pcm<N, S>(&self, notes: &[N], synthesizer: &S) -> Vec<u8>
    where
        N: Note,
        S: NoteSynthesizer<SAMPLE_RATE> + ?Sized,
    {
        to_pcm16(&self.render(notes, synthesizer))
    }
}
