//! Duration-modifying wrappers: dotted notes, fermatas and ties.
//!
//! Decorators never change the frequency of what they wrap, only its
//! duration, and they always ask the wrapped note(s) first.

use super::{Note, Tempo};

/// How much a fermata lengthens the note it is placed on.
pub const FERMATA_FACTOR: u32 = 2;

/// A note lengthened by half its value.
///
/// # Examples
///
/// ```
/// use staffsynth::music::{DottedNote, Note, NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
///
/// let table = PitchTable::new();
/// let quarter = PitchedNote::new(table.get(PitchClass::G, 4).unwrap(), NoteValue::Quarter);
/// let dotted = DottedNote::new(quarter);
/// assert_eq!(dotted.duration(Tempo::new(120).unwrap()), 750);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DottedNote<N: Note> {
    note: N,
}

impl<N: Note> DottedNote<N> {
    pub fn new(note: N) -> Self {
        Self { note }
    }

    pub fn inner(&self) -> &N {
        &self.note
    }
}

impl<N: Note> Note for DottedNote<N> {
    fn frequency(&self) -> f64 {
        self.note.frequency()
    }

    fn duration(&self, tempo: Tempo) -> u32 {
        (f64::from(self.note.duration(tempo)) * 1.5).round() as u32
    }
}

/// A note held for [`FERMATA_FACTOR`] times its written length.
#[derive(Debug, Clone, PartialEq)]
pub struct FermataNote<N: Note> {
    note: N,
}

impl<N: Note> FermataNote<N> {
    pub fn new(note: N) -> Self {
        Self { note }
    }

    pub fn inner(&self) -> &N {
        &self.note
    }
}

impl<N: Note> Note for FermataNote<N> {
    fn frequency(&self) -> f64 {
        self.note.frequency()
    }

    fn duration(&self, tempo: Tempo) -> u32 {
        self.note.duration(tempo).saturating_mul(FERMATA_FACTOR)
    }
}

/// Several notes tied into one event.
///
/// The event sounds at the first note's frequency and lasts as long as all
/// tied notes together. An empty tie is silent and lasts 0 ms.
#[derive(Debug, Default)]
pub struct TiedNotes {
    notes: Vec<Box<dyn Note>>,
}

impl TiedNotes {
    /// Ties `notes` together, in order.
    pub fn new(notes: Vec<Box<dyn Note>>) -> Self {
        Self { notes }
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
}

impl FromIterator<Box<dyn Note>> for TiedNotes {
    fn from_iter<I: IntoIterator<Item = Box<dyn Note>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Note for TiedNotes {
    fn frequency(&self) -> f64 {
        self.notes.first().map_or(0.0, |note| note.frequency())
    }

    fn duration(&self, tempo: Tempo) -> u32 {
        self.notes
            .iter()
            .map(|note| note.duration(tempo))
            .fold(0, u32::saturating_add)
    }
}
