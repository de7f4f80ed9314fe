//! Pitch classes, concrete pitches and the equal-temperament pitch table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use log::trace;

use crate::core::{Error, Result};

/// Number of octaves a pitch may belong to (octaves 0 through 8).
pub const OCTAVES: u8 = 9;

/// Reference pitch of the tuning: A4.
pub const CONCERT_A: f64 = 440.0;

/// Musical note names in the chromatic scale.
///
/// Each variant represents one of the 12 notes in the chromatic scale, in
/// ascending order starting from C. Enharmonic spellings share a variant
/// (D flat is `CSharp`).
///
/// # Examples
///
/// ```
/// use staffsynth::music::PitchClass;
///
/// assert_eq!(PitchClass::A.ordinal(), 9);
/// assert_eq!("Bb".parse::<PitchClass>().unwrap(), PitchClass::ASharp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Returns the semitone offset from C (0-11) for this pitch class.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffsynth::music::PitchClass;
    ///
    /// assert_eq!(PitchClass::C.ordinal(), 0);
    /// assert_eq!(PitchClass::CSharp.ordinal(), 1);
    /// assert_eq!(PitchClass::B.ordinal(), 11);
    /// ```
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the pitch class `ordinal` semitones above C, wrapping every 12.
    pub fn from_ordinal(ordinal: u8) -> PitchClass {
        Self::ALL[usize::from(ordinal % 12)]
    }

    /// Canonical (sharp) spelling of this pitch class.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    /// Parses a pitch class from its name.
    ///
    /// Supports both sharp (#) and flat (b) notation, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "C" => Ok(PitchClass::C),
            "C#" | "DB" => Ok(PitchClass::CSharp),
            "D" => Ok(PitchClass::D),
            "D#" | "EB" => Ok(PitchClass::DSharp),
            "E" => Ok(PitchClass::E),
            "F" => Ok(PitchClass::F),
            "F#" | "GB" => Ok(PitchClass::FSharp),
            "G" => Ok(PitchClass::G),
            "G#" | "AB" => Ok(PitchClass::GSharp),
            "A" => Ok(PitchClass::A),
            "A#" | "BB" => Ok(PitchClass::ASharp),
            "B" => Ok(PitchClass::B),
            _ => Err(Error::UnknownPitchClass(s.to_string())),
        }
    }
}

/// A validated (pitch class, octave) pair.
///
/// Keys are usually produced by the `pitch!` macro, which checks the octave
/// range at compile time, or by [`PitchKey::new`] at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchKey {
    class: PitchClass,
    octave: u8,
}

impl PitchKey {
    /// Creates a key, rejecting octaves above 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffsynth::music::{PitchClass, PitchKey};
    ///
    /// assert!(PitchKey::new(PitchClass::C, 8).is_ok());
    /// assert!(PitchKey::new(PitchClass::C, 9).is_err());
    /// ```
    pub fn new(class: PitchClass, octave: u8) -> Result<Self> {
        if octave >= OCTAVES {
            return Err(Error::OctaveOutOfRange {
                octave: i32::from(octave),
            });
        }
        Ok(Self { class, octave })
    }

    /// Creates a key without checking the octave.
    ///
    /// Used by the `pitch!` macro after it has validated its literal.
    #[doc(hidden)]
    pub const fn new_unchecked(class: PitchClass, octave: u8) -> Self {
        Self { class, octave }
    }

    pub fn class(&self) -> PitchClass {
        self.class
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }
}

/// A concrete pitch: a pitch class in a given octave, with its frequency.
///
/// Instances are only handed out by a [`PitchTable`], which guarantees that
/// a given (pitch class, octave) pair always maps to the same shared value.
#[derive(Debug, Clone, PartialEq)]
pub struct NotePitch {
    class: PitchClass,
    octave: u8,
    frequency: f64,
}

impl NotePitch {
    /// Computes the equal-temperament frequency of a pitch, with A4 = 440 Hz.
    ///
    /// Uses the formula: f = 440 * 2^(semitones from A4 / 12)
    fn equal_temperament(class: PitchClass, octave: u8) -> f64 {
        let semitones = i32::from(class.ordinal()) - i32::from(PitchClass::A.ordinal())
            + (i32::from(octave) - 4) * 12;
        CONCERT_A * 2.0_f64.powf(f64::from(semitones) / 12.0)
    }

    pub fn class(&self) -> PitchClass {
        self.class
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// Frequency of this pitch in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn key(&self) -> PitchKey {
        PitchKey::new_unchecked(self.class, self.octave)
    }
}

impl fmt::Display for NotePitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

/// Lazily computed, append-only cache of [`NotePitch`] values.
///
/// Requesting the same pitch twice yields the same `Arc`, so pitches can be
/// compared with [`Arc::ptr_eq`]. The table is meant to be created once by
/// the application and shared by reference; lookups from several threads
/// are safe, and the first insertion of a pitch is serialized by a lock.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use staffsynth::music::{PitchClass, PitchTable};
///
/// let table = PitchTable::new();
/// let a4 = table.get(PitchClass::A, 4).unwrap();
/// assert_eq!(a4.frequency(), 440.0);
///
/// let again = table.get(PitchClass::A, 4).unwrap();
/// assert!(Arc::ptr_eq(&a4, &again));
/// ```
#[derive(Debug, Default)]
pub struct PitchTable {
    pitches: RwLock<HashMap<PitchKey, Arc<NotePitch>>>,
}

impl PitchTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pitch for `class` in `octave`.
    ///
    /// # Errors
    ///
    /// [`Error::OctaveOutOfRange`] if `octave` is above 8.
    pub fn get(&self, class: PitchClass, octave: u8) -> Result<Arc<NotePitch>> {
        Ok(self.lookup(PitchKey::new(class, octave)?))
    }

    /// Returns the pitch `alteration` semitones away from `class` in `octave`.
    ///
    /// The shifted pitch class wraps around the chromatic scale, carrying
    /// into the neighbouring octaves.
    ///
    /// # Arguments
    ///
    /// * `class` - Pitch class before alteration
    /// * `octave` - Octave before alteration
    /// * `alteration` - Semitones to shift by (positive raises the pitch)
    ///
    /// # Errors
    ///
    /// [`Error::OctaveOutOfRange`] if the resulting octave is outside `0..=8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffsynth::music::{PitchClass, PitchTable};
    ///
    /// let table = PitchTable::new();
    ///
    /// // B4 raised by a semitone is C5
    /// let c5 = table.frequency_of(PitchClass::B, 4, 1).unwrap();
    /// assert_eq!(c5.class(), PitchClass::C);
    /// assert_eq!(c5.octave(), 5);
    ///
    /// // C0 lowered by a semitone falls off the table
    /// assert!(table.frequency_of(PitchClass::C, 0, -1).is_err());
    /// ```
    pub fn frequency_of(
        &self,
        class: PitchClass,
        octave: i32,
        alteration: i32,
    ) -> Result<Arc<NotePitch>> {
        let shifted = i32::from(class.ordinal())
            .checked_add(alteration)
            .ok_or(Error::OctaveOutOfRange { octave })?;
        let octave = octave
            .checked_add(shifted.div_euclid(12))
            .ok_or(Error::OctaveOutOfRange { octave })?;
        if !(0..i32::from(OCTAVES)).contains(&octave) {
            return Err(Error::OctaveOutOfRange { octave });
        }
        let class = PitchClass::from_ordinal(shifted.rem_euclid(12) as u8);
        Ok(self.lookup(PitchKey::new_unchecked(class, octave as u8)))
    }

    /// Returns the pitch for an already validated key.
    pub fn lookup(&self, key: PitchKey) -> Arc<NotePitch> {
        if let Some(pitch) = self
            .pitches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(pitch);
        }

        let mut pitches = self.pitches.write().unwrap_or_else(PoisonError::into_inner);
        let pitch = pitches.entry(key).or_insert_with(|| {
            let frequency = NotePitch::equal_temperament(key.class, key.octave);
            trace!("caching pitch {}{} at {:.3} Hz", key.class, key.octave, frequency);
            Arc::new(NotePitch {
                class: key.class,
                octave: key.octave,
                frequency,
            })
        });
        Arc::clone(pitch)
    }

    /// Returns `pitch` shifted by `alteration` semitones.
    pub fn alter(&self, pitch: &NotePitch, alteration: i32) -> Result<Arc<NotePitch>> {
        self.frequency_of(pitch.class, i32::from(pitch.octave), alteration)
    }

    /// Returns `pitch` raised by a semitone.
    pub fn sharp(&self, pitch: &NotePitch) -> Result<Arc<NotePitch>> {
        self.alter(pitch, 1)
    }

    /// Returns `pitch` lowered by a semitone.
    pub fn flat(&self, pitch: &NotePitch) -> Result<Arc<NotePitch>> {
        self.alter(pitch, -1)
    }

    /// Number of pitches computed so far.
    pub fn len(&self) -> usize {
        self.pitches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
