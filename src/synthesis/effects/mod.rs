//! Effects that modulate an already synthesized note.

mod vibrato;

pub use vibrato::Vibrato;
