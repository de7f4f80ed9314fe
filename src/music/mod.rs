//! Musical notation: pitches, rhythmic values, notes and scores.
//!
//! Pitches are interned by a [`PitchTable`], so equal pitches share one
//! allocation. Notes expose their frequency and their duration at a given
//! [`Tempo`]; decorators such as [`DottedNote`] and [`TiedNotes`] wrap other
//! notes to change how long they last.

mod decorators;
mod factory;
mod instruments;
mod note;
mod pitch;
mod rest;
mod score;
mod value;

pub use decorators::{DottedNote, FERMATA_FACTOR, FermataNote, TiedNotes};
pub use factory::{DefaultNoteFactory, NoteFactory};
pub use instruments::{Instrument, InstrumentRegistry};
pub use note::{Note, PitchedNote};
pub use pitch::{CONCERT_A, NotePitch, OCTAVES, PitchClass, PitchKey, PitchTable};
pub use rest::Rest;
pub use score::{MusicPiece, Score};
pub use value::{NoteValue, Tempo};
