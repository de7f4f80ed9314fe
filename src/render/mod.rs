//! Turning rendered notes into tracks, mixes and bytes.

mod mixer;
mod pcm;
mod track;
#[cfg(feature = "wav")]
mod wav;

pub use mixer::Mixer;
pub use pcm::{PCM16_SCALE, quantize, to_pcm16};
pub use track::{DEFAULT_VOLUME, TrackRenderer};
#[cfg(feature = "wav")]
pub use wav::{write_wav, write_wav_to};
