//! Self-contained percussion models.
//!
//! Each strategy follows the same pattern: an exponentially decaying
//! envelope multiplied by an oscillating or noisy carrier. None of them are
//! decorators; they build their own buffer from the note and tempo.

mod bass_drum;
mod cymbal;
mod snare;
mod timpani;
mod triangle;
mod xylophone;

pub use bass_drum::BassDrum;
pub use cymbal::Cymbal;
pub use snare::SnareDrum;
pub use timpani::Timpani;
pub use triangle::Triangle;
pub use xylophone::Xylophone;

/// Linear attack over `attack` seconds followed by `exp(-rate * (t - attack))`.
fn strike_envelope(t: f64, attack: f64, rate: f64) -> f64 {
    if t < attack {
        t / attack
    } else {
        (-rate * (t - attack)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_strike_envelope() {
        assert_eq!(strike_envelope(0.0, 0.01, 15.0), 0.0);
        assert!((strike_envelope(0.005, 0.01, 15.0) - 0.5).abs() < EPSILON);
        assert!((strike_envelope(0.01, 0.01, 15.0) - 1.0).abs() < EPSILON);
        assert!((strike_envelope(0.11, 0.01, 10.0) - (-1.0_f64).exp()).abs() < EPSILON);
    }
}
