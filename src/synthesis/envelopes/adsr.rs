//! ADSR (Attack, Decay, Sustain, Release) amplitude envelope.

use crate::core::{Error, NoteSynthesizer, Result, is_audible, non_negative};
use crate::music::{Note, Tempo};

/// Shapes a wrapped synthesizer's output with an ADSR envelope.
///
/// The envelope is laid out over the note's full duration `D`:
/// - **Attack**: ramps from 0 to 1 over `attack` ms
/// - **Decay**: ramps from 1 down to `sustain` over `decay` ms
/// - **Sustain**: holds at `sustain` until `D - release`
/// - **Release**: ramps from `sustain` to 0, reaching it at `D`
///
/// The envelope level is scaled by the volume, and so is the wrapped
/// synthesizer's output, so the effective gain is `volume²` at full
/// envelope.
///
/// # Examples
///
/// ```
/// use staffsynth::core::NoteSynthesizer;
/// use staffsynth::music::{NoteValue, PitchClass, PitchTable, PitchedNote, Tempo};
/// use staffsynth::synthesis::{Adsr, PureSound};
///
/// // 100 ms attack, 200 ms decay, 0.7 sustain, 300 ms release
/// let synth = Adsr::new(PureSound::<44100>::new(), 100.0, 200.0, 0.7, 300.0).unwrap();
///
/// let table = PitchTable::new();
/// let note = PitchedNote::new(table.get(PitchClass::G, 3).unwrap(), NoteValue::Whole);
/// let samples = synth.synthesize(&note, Tempo::new(120).unwrap(), 0.8);
/// assert_eq!(samples.len(), 88200);
/// assert_eq!(samples[0], 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Adsr<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> {
    source: S,
    attack_ms: f64,
    decay_ms: f64,
    sustain: f64,
    release_ms: f64,
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> Adsr<SAMPLE_RATE, S> {
    /// Creates a new ADSR envelope around `source`.
    ///
    /// # Arguments
    ///
    /// * `source` - Synthesizer to shape
    /// * `attack_ms` - Attack time in milliseconds
    /// * `decay_ms` - Decay time in milliseconds
    /// * `sustain` - Sustain level (0.0 to 1.0)
    /// * `release_ms` - Release time in milliseconds
    ///
    /// # Errors
    ///
    /// [`Error::NegativeParameter`] for a negative time and
    /// [`Error::InvalidSustain`] for a sustain level outside `[0, 1]`.
    pub fn new(
        source: S,
        attack_ms: f64,
        decay_ms: f64,
        sustain: f64,
        release_ms: f64,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&sustain) {
            return Err(Error::InvalidSustain { level: sustain });
        }
        Ok(Self {
            source,
            attack_ms: non_negative("attack", attack_ms)?,
            decay_ms: non_negative("decay", decay_ms)?,
            sustain,
            release_ms: non_negative("release", release_ms)?,
        })
    }

    pub fn attack_ms(&self) -> f64 {
        self.attack_ms
    }

    pub fn decay_ms(&self) -> f64 {
        self.decay_ms
    }

    pub fn sustain(&self) -> f64 {
        self.sustain
    }

    pub fn release_ms(&self) -> f64 {
        self.release_ms
    }

    pub fn inner(&self) -> &S {
        &self.source
    }

    /// Envelope level at `t_ms` into a note lasting `duration_ms`, scaled by `volume`.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffsynth::synthesis::{Adsr, PureSound};
    ///
    /// let adsr = Adsr::new(PureSound::<44100>::new(), 10.0, 10.0, 0.5, 10.0).unwrap();
    /// assert_eq!(adsr.envelope_at(0.0, 100.0, 1.0), 0.0);
    /// assert_eq!(adsr.envelope_at(10.0, 100.0, 1.0), 1.0);
    /// assert_eq!(adsr.envelope_at(50.0, 100.0, 0.8), 0.4);
    /// assert_eq!(adsr.envelope_at(100.0, 100.0, 1.0), 0.0);
    /// ```
    pub fn envelope_at(&self, t_ms: f64, duration_ms: f64, volume: f64) -> f64 {
        let decay_end = self.attack_ms + self.decay_ms;
        let release_start = duration_ms - self.release_ms;

        let level = if t_ms < self.attack_ms {
            t_ms / self.attack_ms
        } else if t_ms < decay_end {
            1.0 - (t_ms - self.attack_ms) / self.decay_ms * (1.0 - self.sustain)
        } else if t_ms < release_start {
            self.sustain
        } else if t_ms < duration_ms {
            self.sustain * (1.0 - (t_ms - release_start) / self.release_ms)
        } else {
            0.0
        };
        level * volume
    }
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> NoteSynthesizer<SAMPLE_RATE>
    for Adsr<SAMPLE_RATE, S>
{
    fn synthesize(&self, note: &dyn Note, tempo: Tempo, volume: f64) -> Vec<f64> {
        let mut samples = self.source.synthesize(note, tempo, volume);
        if !is_audible(note) {
            samples.fill(0.0);
            return samples;
        }

        let duration_ms = f64::from(note.duration(tempo));
        let ms_per_sample = 1000.0 / SAMPLE_RATE as f64;

        for (i, sample) in samples.iter_mut().enumerate() {
            *sample *= self.envelope_at(i as f64 * ms_per_sample, duration_ms, volume);
        }
        samples
    }
}
