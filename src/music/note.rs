//! The note capability and pitched notes.

use std::fmt;
use std::sync::Arc;

use super::{NotePitch, NoteValue, Tempo};

/// Anything that can be played: it has a frequency and a duration.
///
/// Rests report a frequency of 0 Hz. Duration depends on the tempo the
/// note is played at and is expressed in whole milliseconds.
///
/// # Examples
///
/// ```
/// use staffsynth::music::{Note, NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::A, 4).unwrap(), NoteValue::Quarter);
///
/// assert_eq!(note.frequency(), 440.0);
/// assert_eq!(note.duration(Tempo::new(120).unwrap()), 500);
/// ```
pub trait Note: fmt::Debug + Send + Sync {
    /// Frequency in Hz, or 0 for silence.
    fn frequency(&self) -> f64;

    /// Duration in milliseconds when played at `tempo`.
    fn duration(&self, tempo: Tempo) -> u32;
}

impl<N: Note + ?Sized> Note for Box<N> {
    fn frequency(&self) -> f64 {
        (**self).frequency()
    }

    fn duration(&self, tempo: Tempo) -> u32 {
        (**self).duration(tempo)
    }
}

impl<N: Note + ?Sized> Note for Arc<N> {
    fn frequency(&self) -> f64 {
        (**self).frequency()
    }

    fn duration(&self, tempo: Tempo) -> u32 {
        (**self).duration(tempo)
    }
}

/// A note with a definite pitch and rhythmic value.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchedNote {
    pitch: Arc<NotePitch>,
    value: NoteValue,
}

impl PitchedNote {
    /// Creates a note playing `pitch` for `value`.
    pub fn new(pitch: Arc<NotePitch>, value: NoteValue) -> Self {
        Self { pitch, value }
    }

    pub fn pitch(&self) -> &Arc<NotePitch> {
        &self.pitch
    }

    pub fn value(&self) -> NoteValue {
        self.value
    }
}

impl Note for PitchedNote {
    fn frequency(&self) -> f64 {
        self.pitch.frequency()
    }

    fn duration(&self, tempo: Tempo) -> u32 {
        self.value.duration(tempo)
    }
}

impl fmt::Display for PitchedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pitch, self.value)
    }
}
