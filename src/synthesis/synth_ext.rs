//! Extension trait for chaining synthesis decorators.

use rand::Rng;

use crate::core::{NoteSynthesizer, Result};
use crate::synthesis::effects::Vibrato;
use crate::synthesis::envelopes::Adsr;
use crate::synthesis::harmonics::{HarmonicSeries, Harmonics};
use crate::synthesis::noise::WhiteNoise;

/// Extension trait providing decorator builders for every synthesizer.
///
/// Each method consumes the synthesizer and wraps it, so a pipeline reads in
/// the order its stages are applied, innermost first. The sample rate comes
/// from the wrapped synthesizer's type.
///
/// # Examples
///
/// ```
/// use staffsynth::synthesis::{NoteSynthesizerExt, PureSound};
///
/// # fn main() -> staffsynth::core::Result<()> {
/// // Same pipeline as the built-in violin
/// let violin = PureSound::<44100>::new()
///     .harmonics(10)?
///     .adsr(100.0, 200.0, 0.7, 300.0)?
///     .vibrato(0.01, 5.0)?;
/// assert_eq!(violin.speed(), 5.0);
/// # Ok(())
/// # }
/// ```
pub trait NoteSynthesizerExt<const SAMPLE_RATE: u32>: NoteSynthesizer<SAMPLE_RATE> + Sized {
    /// Replaces the signal with `count` additive harmonics.
    ///
    /// See [`Harmonics::new`].
    fn harmonics(self, count: usize) -> Result<Harmonics<SAMPLE_RATE, Self>> {
        Harmonics::new(self, count)
    }

    /// Replaces the signal with a custom series of `count` partials.
    ///
    /// See [`HarmonicSeries::new`].
    fn harmonic_series(
        self,
        count: u32,
        index: impl Fn(u32) -> f64 + Send + Sync + 'static,
        amplitude: impl Fn(u32, f64) -> f64 + Send + Sync + 'static,
    ) -> Result<HarmonicSeries<SAMPLE_RATE, Self>> {
        HarmonicSeries::new(self, count, index, amplitude)
    }

    /// Shapes the signal with an ADSR envelope, times in milliseconds.
    ///
    /// See [`Adsr::new`].
    fn adsr(
        self,
        attack_ms: f64,
        decay_ms: f64,
        sustain: f64,
        release_ms: f64,
    ) -> Result<Adsr<SAMPLE_RATE, Self>> {
        Adsr::new(self, attack_ms, decay_ms, sustain, release_ms)
    }

    /// Adds a `depth * sin(2π * speed * t)` wobble.
    ///
    /// See [`Vibrato::new`].
    fn vibrato(self, depth: f64, speed: f64) -> Result<Vibrato<SAMPLE_RATE, Self>> {
        Vibrato::new(self, depth, speed)
    }

    /// Adds uniform noise of the given amplitude, seeded from system entropy.
    ///
    /// See [`WhiteNoise::new`].
    fn white_noise(self, amplitude: f64) -> Result<WhiteNoise<SAMPLE_RATE, Self>> {
        WhiteNoise::new(self, amplitude)
    }

    /// Adds uniform noise drawn from `rng`.
    fn white_noise_with_rng<R: Rng>(
        self,
        amplitude: f64,
        rng: R,
    ) -> Result<WhiteNoise<SAMPLE_RATE, Self, R>> {
        WhiteNoise::with_rng(self, amplitude, rng)
    }
}

impl<const SAMPLE_RATE: u32, S: NoteSynthesizer<SAMPLE_RATE>> NoteSynthesizerExt<SAMPLE_RATE> for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeNote;
    use crate::music::Tempo;
    use crate::synthesis::PureSound;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tempo() -> Tempo {
        Tempo::new(120).unwrap()
    }

    #[test]
    fn test_chain_matches_nested_constructors() {
        let note = FakeNote::new(440.0, 250);
        let chained = PureSound::<44100>::new()
            .harmonics(6)
            .unwrap()
            .adsr(10.0, 20.0, 0.5, 30.0)
            .unwrap()
            .vibrato(0.02, 4.0)
            .unwrap();
        let nested = Vibrato::new(
            Adsr::new(
                Harmonics::new(PureSound::<44100>::new(), 6).unwrap(),
                10.0,
                20.0,
                0.5,
                30.0,
            )
            .unwrap(),
            0.02,
            4.0,
        )
        .unwrap();
        assert_eq!(
            chained.synthesize(&note, tempo(), 0.6),
            nested.synthesize(&note, tempo(), 0.6)
        );
    }

    #[test]
    fn test_chain_propagates_errors() {
        assert!(PureSound::<44100>::new().harmonics(0).is_err());
        assert!(
            PureSound::<44100>::new()
                .adsr(1.0, 1.0, 2.0, 1.0)
                .is_err()
        );
        assert!(PureSound::<44100>::new().white_noise(-1.0).is_err());
    }

    #[test]
    fn test_seeded_noise_in_chain() {
        let note = FakeNote::new(440.0, 20);
        let build = || {
            PureSound::<44100>::new()
                .white_noise_with_rng(0.1, StdRng::seed_from_u64(5))
                .unwrap()
                .harmonic_series(3, f64::from, |_, _| 1.0)
                .unwrap()
        };
        assert_eq!(
            build().synthesize(&note, tempo(), 0.5),
            build().synthesize(&note, tempo(), 0.5)
        );
    }
}
