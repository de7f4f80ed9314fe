//! Note synthesis strategies.
//!
//! [`PureSound`] is the base oscillator. The decorators in [`harmonics`],
//! [`envelopes`], [`effects`] and [`noise`] each wrap another strategy and
//! reshape its buffer, and the [`percussion`] models build their own buffer
//! from scratch. [`NoteSynthesizerExt`] chains decorators fluently.

pub mod effects;
pub mod envelopes;
pub mod harmonics;
pub mod noise;
pub mod oscillators;
pub mod percussion;
mod synth_ext;

pub use effects::Vibrato;
pub use envelopes::Adsr;
pub use harmonics::{HarmonicSeries, Harmonics};
pub use noise::WhiteNoise;
pub use oscillators::PureSound;
pub use percussion::{BassDrum, Cymbal, SnareDrum, Timpani, Triangle, Xylophone};
pub use synth_ext::NoteSynthesizerExt;
