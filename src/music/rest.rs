//! Rests: silent notes with augmentation dots and ties.

use super::{Note, NoteValue, Tempo};
use crate::core::{Error, Result};

/// A period of silence.
///
/// Each augmentation dot adds half of the previous addition, so a rest with
/// `n` dots lasts `2 - 0.5^n` times its base value. Rests may be tied with
/// other silent notes, whose durations are added on top.
///
/// # Examples
///
/// ```
/// use staffsynth::music::{Note, NoteValue, Rest, Tempo};
///
/// let tempo = Tempo::new(120).unwrap();
/// let mut rest = Rest::new(NoteValue::Quarter);
/// rest.add_dots(2);
/// assert_eq!(rest.duration(tempo), 875);
///
/// let tied = Rest::new(NoteValue::Quarter)
///     .tie_with(Rest::new(NoteValue::Eighth))
///     .unwrap();
/// assert_eq!(tied.duration(tempo), 750);
/// assert_eq!(tied.frequency(), 0.0);
/// ```
#[derive(Debug)]
pub struct Rest {
    value: NoteValue,
    dots: u32,
    tied: Vec<Box<dyn Note>>,
}

impl Rest {
    /// Creates an undotted rest lasting `value`.
    pub fn new(value: NoteValue) -> Self {
        Self {
            value,
            dots: 0,
            tied: Vec::new(),
        }
    }

    /// Creates a rest with `dots` augmentation dots.
    pub fn dotted(value: NoteValue, dots: u32) -> Self {
        Self {
            dots,
            ..Self::new(value)
        }
    }

    /// Adds a single augmentation dot.
    pub fn add_dot(&mut self) {
        self.dots = self.dots.saturating_add(1);
    }

    /// Adds `count` augmentation dots.
    pub fn add_dots(&mut self, count: u32) {
        self.dots = self.dots.saturating_add(count);
    }

    /// Ties this rest with another silent note.
    ///
    /// # Errors
    ///
    /// [`Error::TieWithSound`] if `other` has a non-zero frequency.
    pub fn tie_with(mut self, other: impl Note + 'static) -> Result<Self> {
        let frequency = other.frequency();
        if frequency != 0.0 {
            return Err(Error::TieWithSound { frequency });
        }
        self.tied.push(Box::new(other));
        Ok(self)
    }

    pub fn value(&self) -> NoteValue {
        self.value
    }

    pub fn dots(&self) -> u32 {
        self.dots
    }

    /// Notes tied to this rest, in order.
    pub fn tied_notes(&self) -> &[Box<dyn Note>] {
        &self.tied
    }

    fn dot_multiplier(&self) -> f64 {
        2.0 - 0.5_f64.powi(self.dots.min(i32::MAX as u32) as i32)
    }
}

impl Note for Rest {
    fn frequency(&self) -> f64 {
        0.0
    }

    fn duration(&self, tempo: Tempo) -> u32 {
        let base = f64::from(self.value.duration(tempo));
        let dotted = (base * self.dot_multiplier()).round() as u32;
        self.tied
            .iter()
            .map(|note| note.duration(tempo))
            .fold(dotted, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeNote;
    use crate::music::{PitchClass, PitchTable, PitchedNote, TiedNotes};

    fn tempo() -> Tempo {
        Tempo::new(120).unwrap()
    }

    #[test]
    fn test_rest_is_silent() {
        assert_eq!(Rest::new(NoteValue::Whole).frequency(), 0.0);
    }

    #[test]
    fn test_dots_follow_geometric_series() {
        let mut rest = Rest::new(NoteValue::Quarter);
        assert_eq!(rest.duration(tempo()), 500);
        rest.add_dot();
        assert_eq!(rest.duration(tempo()), 750);
        rest.add_dot();
        assert_eq!(rest.duration(tempo()), 875);
        // 500 * 1.875 = 937.5
        rest.add_dot();
        assert_eq!(rest.duration(tempo()), 938);
        assert_eq!(rest.dots(), 3);
    }

    #[test]
    fn test_add_dots_in_bulk() {
        let mut rest = Rest::new(NoteValue::Half);
        rest.add_dots(0);
        assert_eq!(rest.duration(tempo()), 1000);
        rest.add_dots(2);
        assert_eq!(rest.duration(tempo()), 1750);
        assert_eq!(Rest::dotted(NoteValue::Half, 2).duration(tempo()), 1750);
    }

    #[test]
    fn test_many_dots_approach_double() {
        let rest = Rest::dotted(NoteValue::Quarter, 64);
        assert_eq!(rest.duration(tempo()), 1000);
    }

    #[test]
    fn test_tied_rests_add_up() {
        let rest = Rest::new(NoteValue::Quarter)
            .tie_with(Rest::new(NoteValue::Quarter))
            .unwrap()
            .tie_with(Rest::dotted(NoteValue::Eighth, 1))
            .unwrap();
        assert_eq!(rest.tied_notes().len(), 2);
        assert_eq!(rest.duration(tempo()), 500 + 500 + 375);
    }

    #[test]
    fn test_dots_do_not_apply_to_tied_notes() {
        let rest = Rest::dotted(NoteValue::Quarter, 1)
            .tie_with(Rest::new(NoteValue::Quarter))
            .unwrap();
        assert_eq!(rest.duration(tempo()), 750 + 500);
    }

    #[test]
    fn test_tie_with_any_silent_note() {
        let rest = Rest::new(NoteValue::Eighth)
            .tie_with(FakeNote::new(0.0, 100))
            .unwrap()
            .tie_with(TiedNotes::default())
            .unwrap();
        assert_eq!(rest.duration(tempo()), 350);
    }

    #[test]
    fn test_tie_with_sound_rejected() {
        let table = PitchTable::new();
        let sound = PitchedNote::new(table.get(PitchClass::A, 4).unwrap(), NoteValue::Quarter);
        let result = Rest::new(NoteValue::Quarter).tie_with(sound);
        assert!(matches!(result, Err(Error::TieWithSound { frequency }) if frequency == 440.0));
    }
}
