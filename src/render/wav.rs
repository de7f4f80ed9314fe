//! WAV output through `hound`.

use std::io::{Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;

use super::pcm::quantize;
use crate::core::Result;

/// Format of every file written here: mono, 16-bit integer PCM.
fn pcm16_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Writes `samples` as a mono 16-bit WAV file at `path`.
///
/// Samples are quantized exactly like [`to_pcm16`](super::to_pcm16).
///
/// # Errors
///
/// [`Error::Wav`](crate::core::Error::Wav) if the file cannot be created or
/// written.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let writer = WavWriter::create(path, pcm16_spec(sample_rate))?;
    write_samples(writer, samples)?;
    debug!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

/// Writes `samples` as a mono 16-bit WAV stream into `writer`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use staffsynth::render::write_wav_to;
///
/// let mut buffer = Cursor::new(Vec::new());
/// write_wav_to(&mut buffer, &[0.0, 0.5, -0.5], 44100).unwrap();
///
/// buffer.set_position(0);
/// let reader = hound::WavReader::new(buffer).unwrap();
/// assert_eq!(reader.len(), 3);
/// ```
pub fn write_wav_to<W: Write + Seek>(writer: W, samples: &[f64], sample_rate: u32) -> Result<()> {
    write_samples(WavWriter::new(writer, pcm16_spec(sample_rate))?, samples)
}

fn write_samples<W: Write + Seek>(mut writer: WavWriter<W>, samples: &[f64]) -> Result<()> {
    for &sample in samples {
        writer.write_sample(quantize(sample))?;
    }
    writer.finalize()?;
    Ok(())
}
