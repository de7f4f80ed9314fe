//! Construction surface used by score readers.

use std::sync::Arc;

use super::{DottedNote, FermataNote, Note, NotePitch, NoteValue, PitchedNote, Rest, TiedNotes};

/// Builds notes without exposing their concrete types.
///
/// Score readers only deal with `Box<dyn Note>`, which lets decorations nest
/// freely (a fermata on a dotted note, a tie of dotted notes, ...).
///
/// # Examples
///
/// ```
/// use staffsynth::music::{
///     DefaultNoteFactory, Note, NoteFactory, NoteValue, PitchClass, PitchTable, Tempo,
/// };
///
/// let table = PitchTable::new();
/// let factory = DefaultNoteFactory;
///
/// let note = factory.create_note(table.get(PitchClass::C, 4).unwrap(), NoteValue::Quarter);
/// let held = factory.create_fermata_on(factory.create_dotted_note(note));
/// assert_eq!(held.duration(Tempo::new(120).unwrap()), 1500);
/// ```
pub trait NoteFactory {
    /// Creates a rest lasting `value`.
    fn create_rest(&self, value: NoteValue) -> Box<dyn Note>;

    /// Creates a note playing `pitch` for `value`.
    fn create_note(&self, pitch: Arc<NotePitch>, value: NoteValue) -> Box<dyn Note>;

    /// Lengthens `note` by half its duration.
    fn create_dotted_note(&self, note: Box<dyn Note>) -> Box<dyn Note>;

    /// Places a fermata on `note`.
    fn create_fermata_on(&self, note: Box<dyn Note>) -> Box<dyn Note>;

    /// Ties `notes` into a single event.
    fn create_tied_notes(&self, notes: Vec<Box<dyn Note>>) -> Box<dyn Note>;
}

/// The factory producing this crate's own note types.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNoteFactory;

impl NoteFactory for DefaultNoteFactory {
    fn create_rest(&self, value: NoteValue) -> Box<dyn Note> {
        Box::new(Rest::new(value))
    }

    fn create_note(&self, pitch: Arc<NotePitch>, value: NoteValue) -> Box<dyn Note> {
        Box::new(PitchedNote::new(pitch, value))
    }

    fn create_dotted_note(&self, note: Box<dyn Note>) -> Box<dyn Note> {
        Box::new(DottedNote::new(note))
    }

    fn create_fermata_on(&self, note: Box<dyn Note>) -> Box<dyn Note> {
        Box::new(FermataNote::new(note))
    }

    fn create_tied_notes(&self, notes: Vec<Box<dyn Note>>) -> Box<dyn Note> {
        Box::new(TiedNotes::new(notes))
    }
}
