//! The closed set of instruments and the strategies bound to them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;

use crate::core::{DEFAULT_SAMPLE_RATE, Error, NoteSynthesizer, Result};
use crate::synthesis::{
    BassDrum, Cymbal, NoteSynthesizerExt, PureSound, SnareDrum, Timpani, Triangle, Xylophone,
};

/// Every instrument a score can be written for.
///
/// # Examples
///
/// ```
/// use staffsynth::music::Instrument;
///
/// assert_eq!("french-horn".parse::<Instrument>().unwrap(), Instrument::FrenchHorn);
/// assert_eq!("SNARE_DRUM".parse::<Instrument>().unwrap(), Instrument::SnareDrum);
/// assert_eq!(Instrument::BassDrum.to_string(), "bass-drum");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Instrument {
    BassDrum,
    SnareDrum,
    Cymbal,
    Triangle,
    Timpani,
    Xylophone,
    Violin,
    Guitar,
    Piano,
    FrenchHorn,
    Accordion,
    Gasba,
    Flute,
    Banjo,
    Harp,
}

impl Instrument {
    /// All instruments, percussion first.
    pub const ALL: [Instrument; 15] = [
        Instrument::BassDrum,
        Instrument::SnareDrum,
        Instrument::Cymbal,
        Instrument::Triangle,
        Instrument::Timpani,
        Instrument::Xylophone,
        Instrument::Violin,
        Instrument::Guitar,
        Instrument::Piano,
        Instrument::FrenchHorn,
        Instrument::Accordion,
        Instrument::Gasba,
        Instrument::Flute,
        Instrument::Banjo,
        Instrument::Harp,
    ];

    /// Kebab-case name, as used in score files.
    pub fn name(self) -> &'static str {
        match self {
            Instrument::BassDrum => "bass-drum",
            Instrument::SnareDrum => "snare-drum",
            Instrument::Cymbal => "cymbal",
            Instrument::Triangle => "triangle",
            Instrument::Timpani => "timpani",
            Instrument::Xylophone => "xylophone",
            Instrument::Violin => "violin",
            Instrument::Guitar => "guitar",
            Instrument::Piano => "piano",
            Instrument::FrenchHorn => "french-horn",
            Instrument::Accordion => "accordion",
            Instrument::Gasba => "gasba",
            Instrument::Flute => "flute",
            Instrument::Banjo => "banjo",
            Instrument::Harp => "harp",
        }
    }

    /// Whether the instrument is one of the self-contained percussion models.
    pub fn is_percussion(self) -> bool {
        matches!(
            self,
            Instrument::BassDrum
                | Instrument::SnareDrum
                | Instrument::Cymbal
                | Instrument::Triangle
                | Instrument::Timpani
                | Instrument::Xylophone
        )
    }

    /// Builds a fresh strategy for this instrument.
    fn build<const SAMPLE_RATE: u32>(self) -> Result<Arc<dyn NoteSynthesizer<SAMPLE_RATE>>> {
        let pure = PureSound::<SAMPLE_RATE>::new();
        let strategy: Arc<dyn NoteSynthesizer<SAMPLE_RATE>> = match self {
            Instrument::BassDrum => Arc::new(BassDrum::<SAMPLE_RATE>::new()),
            Instrument::SnareDrum => Arc::new(SnareDrum::<SAMPLE_RATE>::new()),
            Instrument::Cymbal => Arc::new(Cymbal::<SAMPLE_RATE>::new()),
            Instrument::Triangle => Arc::new(Triangle::<SAMPLE_RATE>::new()),
            Instrument::Timpani => Arc::new(Timpani::<SAMPLE_RATE>::new()),
            Instrument::Xylophone => Arc::new(Xylophone::<SAMPLE_RATE>::new()),
            Instrument::Violin => Arc::new(
                pure.harmonics(10)?
                    .adsr(100.0, 200.0, 0.7, 300.0)?
                    .vibrato(0.01, 5.0)?,
            ),
            Instrument::Guitar => Arc::new(
                pure.harmonics(8)?
                    .adsr(8.0, 50.0, 0.2, 2500.0)?
                    .vibrato(0.02, 3.0)?,
            ),
            Instrument::Piano => Arc::new(
                pure.harmonic_series(10, f64::from, |k, t| {
                    let k = f64::from(k);
                    (-2.0 * k * t).exp() / k
                })?
                .adsr(10.0, 300.0, 0.2, 500.0)?,
            ),
            Instrument::FrenchHorn => Arc::new(
                pure.harmonics(11)?
                    .adsr(100.0, 80.0, 0.75, 900.0)?
                    .vibrato(0.012, 3.8)?,
            ),
            Instrument::Accordion => Arc::new(
                pure.harmonics(8)?
                    .adsr(40.0, 20.0, 0.85, 500.0)?
                    .vibrato(0.015, 4.2)?,
            ),
            Instrument::Gasba => Arc::new(
                pure.harmonics(4)?
                    .adsr(100.0, 50.0, 0.55, 1200.0)?
                    .vibrato(0.012, 4.0)?
                    .white_noise(0.015)?,
            ),
            // Odd harmonics only, each a third of the previous one
            Instrument::Flute => Arc::new(
                pure.white_noise(0.003)?
                    .adsr(90.0, 0.0, 1.0, 300.0)?
                    .harmonic_series(
                        5,
                        |k| f64::from(2 * k - 1),
                        |k, _| 1.0 / 3.0_f64.powi(k as i32 - 1),
                    )?
                    .vibrato(0.01, 5.0)?,
            ),
            Instrument::Banjo => Arc::new(pure.harmonics(12)?.adsr(3.0, 150.0, 0.3, 1800.0)?),
            // Partial k weighted 0.7^(k-1) * exp(-0.5(k-1)t)
            Instrument::Harp => Arc::new(pure.adsr(1.0, 100.0, 0.3, 1500.0)?.harmonic_series(
                10,
                f64::from,
                |k, t| {
                    let above = f64::from(k - 1);
                    0.7_f64.powf(above) * (-t * above * 0.5).exp()
                },
            )?),
        };
        Ok(strategy)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Instrument {
    type Err = Error;

    /// Parses an instrument name, case-insensitively, with `-` or `_` between words.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('_', "-");
        Instrument::ALL
            .into_iter()
            .find(|instrument| instrument.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| Error::UnknownInstrument(s.to_string()))
    }
}

/// Binds every [`Instrument`] to one shared synthesis strategy.
///
/// Strategies are built once, when the registry is created, and never
/// change afterwards. Asking twice for the same instrument returns the
/// same instance, which can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use staffsynth::music::{Instrument, InstrumentRegistry};
///
/// let registry = InstrumentRegistry::<44100>::new().unwrap();
/// let piano = registry.strategy(Instrument::Piano);
/// assert!(Arc::ptr_eq(piano, registry.strategy(Instrument::Piano)));
/// ```
pub struct InstrumentRegistry<const SAMPLE_RATE: u32 = DEFAULT_SAMPLE_RATE> {
    strategies: Vec<Arc<dyn NoteSynthesizer<SAMPLE_RATE>>>,
}

impl<const SAMPLE_RATE: u32> InstrumentRegistry<SAMPLE_RATE> {
    /// Builds the strategy of every instrument.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while assembling a pipeline.
    pub fn new() -> Result<Self> {
        let strategies = Instrument::ALL
            .into_iter()
            .map(Instrument::build::<SAMPLE_RATE>)
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "Built {} instrument strategies at {} Hz",
            strategies.len(),
            SAMPLE_RATE
        );
        Ok(Self { strategies })
    }

    /// The strategy bound to `instrument`.
    pub fn strategy(&self, instrument: Instrument) -> &Arc<dyn NoteSynthesizer<SAMPLE_RATE>> {
        &self.strategies[instrument as usize]
    }
}

impl<const SAMPLE_RATE: u32> fmt::Debug for InstrumentRegistry<SAMPLE_RATE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentRegistry")
            .field("sample_rate", &SAMPLE_RATE)
            .field("instruments", &self.strategies.len())
            .finish()
    }
}
