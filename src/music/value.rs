//! Rhythmic note values and tempo.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::core::{Error, Result};

/// Milliseconds in one minute.
const MS_PER_MINUTE: f64 = 60_000.0;

/// Beats (quarter notes) in a whole note.
const BEATS_PER_WHOLE: f64 = 4.0;

/// A tempo in beats (quarter notes) per minute.
///
/// A tempo is always strictly positive, so every duration computed from it
/// is well defined.
///
/// # Examples
///
/// ```
/// use staffsynth::music::Tempo;
///
/// let tempo = Tempo::new(120).unwrap();
/// assert_eq!(tempo.bpm(), 120);
/// assert!(Tempo::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tempo(NonZeroU32);

impl Tempo {
    /// Creates a tempo from beats per minute.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTempo`] if `bpm` is zero.
    pub fn new(bpm: u32) -> Result<Self> {
        NonZeroU32::new(bpm)
            .map(Tempo)
            .ok_or(Error::InvalidTempo { bpm })
    }

    /// Beats per minute.
    pub fn bpm(self) -> u32 {
        self.0.get()
    }

    /// Duration of a whole note at this tempo, in milliseconds.
    pub fn whole_note_ms(self) -> f64 {
        MS_PER_MINUTE * BEATS_PER_WHOLE / f64::from(self.bpm())
    }
}

impl From<NonZeroU32> for Tempo {
    fn from(bpm: NonZeroU32) -> Self {
        Tempo(bpm)
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BPM", self.bpm())
    }
}

/// Rhythmic denominations, from a whole note down to a 256th note.
///
/// # Examples
///
/// ```
/// use staffsynth::music::{NoteValue, Tempo};
///
/// let tempo = Tempo::new(120).unwrap();
/// assert_eq!(NoteValue::Quarter.duration(tempo), 500);
/// assert_eq!(NoteValue::Eighth.duration(tempo), 250);
/// assert_eq!("16th".parse::<NoteValue>().unwrap(), NoteValue::Sixteenth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteValue {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    HundredTwentyEighth,
    TwoHundredFiftySixth,
}

impl NoteValue {
    /// All note values, longest first.
    pub const ALL: [NoteValue; 9] = [
        NoteValue::Whole,
        NoteValue::Half,
        NoteValue::Quarter,
        NoteValue::Eighth,
        NoteValue::Sixteenth,
        NoteValue::ThirtySecond,
        NoteValue::SixtyFourth,
        NoteValue::HundredTwentyEighth,
        NoteValue::TwoHundredFiftySixth,
    ];

    /// Fraction of a whole note this value lasts.
    pub fn fraction(self) -> f64 {
        1.0 / f64::from(1u32 << self as u32)
    }

    /// Canonical name, as used in score files.
    pub fn name(self) -> &'static str {
        match self {
            NoteValue::Whole => "whole",
            NoteValue::Half => "half",
            NoteValue::Quarter => "quarter",
            NoteValue::Eighth => "eighth",
            NoteValue::Sixteenth => "16th",
            NoteValue::ThirtySecond => "32nd",
            NoteValue::SixtyFourth => "64th",
            NoteValue::HundredTwentyEighth => "128th",
            NoteValue::TwoHundredFiftySixth => "256th",
        }
    }

    /// Duration in milliseconds at `tempo`, truncated to an integer.
    pub fn duration(self, tempo: Tempo) -> u32 {
        (tempo.whole_note_ms() * self.fraction()) as u32
    }
}

impl fmt::Display for NoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoteValue {
    type Err = Error;

    /// Parses a note value from its canonical name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        NoteValue::ALL
            .into_iter()
            .find(|value| value.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownNoteValue(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tempo(bpm: u32) -> Tempo {
        Tempo::new(bpm).unwrap()
    }

    #[test]
    fn test_zero_tempo_rejected() {
        assert!(matches!(Tempo::new(0), Err(Error::InvalidTempo { bpm: 0 })));
    }

    #[test]
    fn test_whole_note_ms() {
        assert_eq!(tempo(60).whole_note_ms(), 4000.0);
        assert_eq!(tempo(120).whole_note_ms(), 2000.0);
    }

    #[test]
    fn test_fractions() {
        assert_eq!(NoteValue::Whole.fraction(), 1.0);
        assert_eq!(NoteValue::Half.fraction(), 0.5);
        assert_eq!(NoteValue::Quarter.fraction(), 0.25);
        assert_eq!(NoteValue::TwoHundredFiftySixth.fraction(), 0.00390625);
    }

    #[test]
    fn test_durations_at_120() {
        let t = tempo(120);
        assert_eq!(NoteValue::Whole.duration(t), 2000);
        assert_eq!(NoteValue::Half.duration(t), 1000);
        assert_eq!(NoteValue::Quarter.duration(t), 500);
        assert_eq!(NoteValue::Eighth.duration(t), 250);
        assert_eq!(NoteValue::Sixteenth.duration(t), 125);
        // 62.5 ms truncates
        assert_eq!(NoteValue::ThirtySecond.duration(t), 62);
    }

    #[test]
    fn test_durations_truncate() {
        // 240000 / 7 = 34285.71...
        assert_eq!(NoteValue::Whole.duration(tempo(7)), 34285);
        // 240000 / 90 / 4 = 666.66...
        assert_eq!(NoteValue::Quarter.duration(tempo(90)), 666);
    }

    #[test]
    fn test_durations_positive() {
        for value in NoteValue::ALL {
            for bpm in [1, 40, 120, 300] {
                assert!(value.duration(tempo(bpm)) > 0);
            }
        }
    }

    #[test]
    fn test_from_str() {
        for value in NoteValue::ALL {
            assert_eq!(value.name().parse::<NoteValue>().unwrap(), value);
        }
        assert_eq!("QUARTER".parse::<NoteValue>().unwrap(), NoteValue::Quarter);
        assert!(matches!(
            "breve".parse::<NoteValue>(),
            Err(Error::UnknownNoteValue(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(NoteValue::ThirtySecond.to_string(), "32nd");
        assert_eq!(tempo(96).to_string(), "96 BPM");
    }
}
