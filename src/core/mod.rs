//! Core types shared by every part of the crate.
//!
//! This module provides:
//! - `NoteSynthesizer`, the capability every synthesis strategy implements
//! - Helpers converting note durations to sample counts and sample times
//! - The crate-wide `Error` and `Result` types

mod error;
mod synthesizer;

#[cfg(test)]
pub(crate) mod testing;

pub(crate) use error::non_negative;
pub use error::{Error, Result};
pub(crate) use synthesizer::is_audible;
pub use synthesizer::{
    DEFAULT_SAMPLE_RATE, NoteSynthesizer, note_len, sample_count, sample_time,
};
