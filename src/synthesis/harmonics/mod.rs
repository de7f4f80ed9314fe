//! Harmonic decorators that rebuild a note's spectrum from sine partials.

mod additive;
mod series;

pub use additive::Harmonics;
pub use series::{AmplitudeFn, HarmonicSeries, IndexFn};
