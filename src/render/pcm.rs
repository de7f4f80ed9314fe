//! 16-bit PCM quantization.

/// Full-scale value of a 16-bit sample.
pub const PCM16_SCALE: f64 = 32767.0;

/// Quantizes one sample to a signed 16-bit value.
///
/// The sample is scaled by 32767 and rounded. Samples outside `[-1, 1]`
/// saturate at the `i16` limits instead of wrapping around.
///
/// # Examples
///
/// ```
/// use staffsynth::render::quantize;
///
/// assert_eq!(quantize(0.0), 0);
/// assert_eq!(quantize(1.0), 32767);
/// assert_eq!(quantize(-1.0), -32767);
/// assert_eq!(quantize(2.0), i16::MAX);
/// assert_eq!(quantize(-2.0), i16::MIN);
/// ```
pub fn quantize(sample: f64) -> i16 {
    // Float-to-int casts saturate
    (sample * PCM16_SCALE).round() as i16
}

/// Converts samples to mono 16-bit little-endian PCM bytes.
///
/// # Returns
///
/// Two bytes per sample, low byte first
///
/// # Examples
///
/// ```
/// use staffsynth::render::to_pcm16;
///
/// assert_eq!(to_pcm16(&[0.0, 1.0, -1.0]), vec![0x00, 0x00, 0xFF, 0x7F, 0x01, 0x80]);
/// ```
pub fn to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        bytes.extend_from_slice(&quantize(sample).to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_nearest() {
        // 0.5 * 32767 = 16383.5
        assert_eq!(quantize(0.5), 16384);
        assert_eq!(quantize(-0.5), -16384);
        assert_eq!(quantize(1.0 / 32767.0), 1);
        assert_eq!(quantize(0.4 / 32767.0), 0);
    }

    #[test]
    fn test_clips_out_of_range() {
        assert_eq!(quantize(1.5), 32767);
        assert_eq!(quantize(-1.5), -32768);
        assert_eq!(quantize(f64::INFINITY), i16::MAX);
        assert_eq!(quantize(f64::NAN), 0);
    }

    #[test]
    fn test_byte_layout() {
        let bytes = to_pcm16(&[0.5, -0.5]);
        assert_eq!(bytes.len(), 4);
        assert_eq!(i16::from_le_bytes([bytes[0], bytes[1]]), 16384);
        assert_eq!(i16::from_le_bytes([bytes[2], bytes[3]]), -16384);
    }

    #[test]
    fn test_empty() {
        assert!(to_pcm16(&[]).is_empty());
    }
}
