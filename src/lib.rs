//! Staffsynth - Note-to-sample synthesis for Rust
//!
//! This library renders written music into audio samples. Notes carry a
//! pitch and a rhythmic value; synthesis strategies turn each note into a
//! buffer of samples; tracks are rendered note after note and mixed into a
//! single signal.
//!
//! # Modules
//!
//! - [`core`](crate::core): the [`NoteSynthesizer`] capability, error types and sample helpers
//! - [`music`]: pitches, note values, notes and their decorators, scores and instruments
//! - [`synthesis`]: the base oscillator, harmonic, envelope, vibrato and noise
//!   decorators, and the percussion models
//! - [`render`]: track rendering, mixing and 16-bit PCM output
//!
//! # Examples
//!
//! ```
//! use staffsynth::music::{Instrument, InstrumentRegistry, NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
//! use staffsynth::render::TrackRenderer;
//!
//! # fn main() -> staffsynth::Result<()> {
//! let table = PitchTable::new();
//! let melody = [
//!     PitchedNote::new(table.get(PitchClass::C, 4)?, NoteValue::Quarter),
//!     PitchedNote::new(table.get(PitchClass::E, 4)?, NoteValue::Quarter),
//!     PitchedNote::new(table.get(PitchClass::G, 4)?, NoteValue::Half),
//! ];
//!
//! let registry = InstrumentRegistry::<44100>::new()?;
//! let renderer = TrackRenderer::new(Tempo::new(120)?);
//! let samples = renderer.render(&melody, registry.strategy(Instrument::Violin));
//! assert_eq!(samples.len(), 88200);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod music;
pub mod render;
pub mod synthesis;

// Re-export commonly used types at the crate root
pub use crate::core::{Error, NoteSynthesizer, Result};
pub use music::{
    Instrument, InstrumentRegistry, MusicPiece, Note, NoteValue, PitchClass, PitchTable,
    PitchedNote, Rest, Score, Tempo,
};
pub use render::{Mixer, TrackRenderer};
pub use synthesis::{NoteSynthesizerExt, PureSound};

#[cfg(feature = "macros")]
pub use staffsynth_macros::pitch;
