//! Noise decorators.

mod white;

pub use white::WhiteNoise;
