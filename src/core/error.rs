//! Error type shared by the whole crate.

use thiserror::Error;

/// Result type for note construction and synthesis setup.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building notes, pitches and synthesis pipelines.
///
/// Rendering itself never fails: every invalid value is rejected when the
/// note, tempo or strategy holding it is constructed.
#[derive(Debug, Error)]
pub enum Error {
    /// An octave fell outside `0..=8` once an alteration was applied.
    #[error("octave {octave} is out of range (0 to 8)")]
    OctaveOutOfRange {
        /// The octave that was requested.
        octave: i32,
    },

    /// A tempo of zero beats per minute.
    #[error("invalid tempo: {bpm} BPM")]
    InvalidTempo {
        /// The rejected tempo.
        bpm: u32,
    },

    /// A rest can only be tied with other silent notes.
    #[error("cannot tie a rest with a sounding note ({frequency} Hz)")]
    TieWithSound {
        /// Frequency of the note that was rejected.
        frequency: f64,
    },

    /// Harmonic decorators need at least one harmonic.
    #[error("invalid harmonic count: {count}")]
    InvalidHarmonicCount {
        /// The rejected count.
        count: usize,
    },

    /// A parameter that must be zero or positive was negative (or NaN).
    #[error("parameter '{name}' must not be negative, got {value}")]
    NegativeParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Envelope sustain level outside `0.0..=1.0`.
    #[error("sustain level {level} is outside 0.0 to 1.0")]
    InvalidSustain {
        /// The rejected level.
        level: f64,
    },

    /// No pitch class has the given name.
    #[error("unknown pitch class: '{0}'")]
    UnknownPitchClass(String),

    /// No note value has the given name.
    #[error("unknown note value: '{0}'")]
    UnknownNoteValue(String),

    /// No instrument has the given name.
    #[error("unknown instrument: '{0}'")]
    UnknownInstrument(String),

    /// Writing a WAV container failed.
    #[cfg(feature = "wav")]
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

/// Rejects negative or NaN values for parameters that must be `>= 0`.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::NegativeParameter { name, value })
    }
}
