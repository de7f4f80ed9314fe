//! Scores and multi-instrument pieces.

use log::debug;

use super::{Instrument, InstrumentRegistry, Note, Tempo};
use crate::render::{DEFAULT_VOLUME, Mixer, TrackRenderer, to_pcm16};

/// The notes played by one instrument, in order.
///
/// # Examples
///
/// ```
/// use staffsynth::music::{Instrument, NoteValue, Rest, Score};
///
/// let mut score = Score::new(Instrument::Piano);
/// score.add_note(Rest::new(NoteValue::Half));
/// assert_eq!(score.len(), 1);
/// assert_eq!(score.instrument(), Instrument::Piano);
/// ```
#[derive(Debug)]
pub struct Score {
    instrument: Instrument,
    notes: Vec<Box<dyn Note>>,
}

impl Score {
    /// Creates an empty score for `instrument`.
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            notes: Vec::new(),
        }
    }

    /// Creates a score for `instrument` from already built notes.
    pub fn with_notes(instrument: Instrument, notes: Vec<Box<dyn Note>>) -> Self {
        Self { instrument, notes }
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Appends `note` at the end of the score.
    pub fn add_note(&mut self, note: impl Note + 'static) {
        self.notes.push(Box::new(note));
    }

    pub fn notes(&self) -> &[Box<dyn Note>] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Total duration in milliseconds at `tempo`.
    pub fn duration(&self, tempo: Tempo) -> u64 {
        self.notes
            .iter()
            .map(|note| u64::from(note.duration(tempo)))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Score {
    type Item = &'a Box<dyn Note>;
    type IntoIter = std::slice::Iter<'a, Box<dyn Note>>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

/// Several scores played together at one tempo.
///
/// Each score is rendered with its instrument's strategy and the resulting
/// tracks are averaged by a [`Mixer`].
///
/// # Examples
///
/// ```
/// use staffsynth::music::{
///     Instrument, InstrumentRegistry, MusicPiece, NoteValue, PitchClass, PitchTable,
///     PitchedNote, Score, Tempo,
/// };
///
/// let table = PitchTable::new();
/// let mut melody = Score::new(Instrument::Flute);
/// melody.add_note(PitchedNote::new(table.get(PitchClass::A, 5).unwrap(), NoteValue::Half));
/// let mut beat = Score::new(Instrument::BassDrum);
/// beat.add_note(PitchedNote::new(table.get(PitchClass::C, 2).unwrap(), NoteValue::Quarter));
///
/// let mut piece = MusicPiece::new(Tempo::new(120).unwrap());
/// piece.add_score(melody);
/// piece.add_score(beat);
///
/// let registry = InstrumentRegistry::<44100>::new().unwrap();
/// assert_eq!(piece.render(&registry).len(), 44100);
/// ```
#[derive(Debug)]
pub struct MusicPiece {
    tempo: Tempo,
    scores: Vec<Score>,
    volume: f64,
}

impl MusicPiece {
    /// Creates an empty piece at `tempo`, rendered at the default volume.
    pub fn new(tempo: Tempo) -> Self {
        Self {
            tempo,
            scores: Vec::new(),
            volume: DEFAULT_VOLUME,
        }
    }

    /// Sets the volume every score is rendered at (0.0 to 1.0).
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

    /// Adds a score played alongside the others.
    pub fn add_score(&mut self, score: Score) {
        self.scores.push(score);
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Renders every score and mixes them into one buffer.
    ///
    /// # Returns
    ///
    /// As many samples as the longest score needs, or none for an empty piece
    pub fn render<const SAMPLE_RATE: u32>(
        &self,
        registry: &InstrumentRegistry<SAMPLE_RATE>,
    ) -> Vec<f64> {
        let renderer = TrackRenderer::<SAMPLE_RATE>::new(self.tempo).with_volume(self.volume);
        let mixer: Mixer = self
            .scores
            .iter()
            .map(|score| {
                let strategy = registry.strategy(score.instrument());
                debug!("rendering {} notes for {}", score.len(), score.instrument());
                renderer.render(score.notes(), strategy)
            })
            .collect();
        mixer.mix()
    }

    /// Renders the piece as 16-bit little-endian PCM bytes.
    pub fn render_pcm<const SAMPLE_RATE: u32>(
        &self,
        registry: &InstrumentRegistry<SAMPLE_RATE>,
    ) -> Vec<u8> {
        to_pcm16(&self.render(registry))
    }
}

impl Extend<Score> for MusicPiece {
    fn extend<I: IntoIterator<Item = Score>>(&mut self, scores: I) {
        self.scores.extend(scores);
    }
}
