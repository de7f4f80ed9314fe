//! Averaging mixer for pre-rendered tracks.

use log::debug;

/// Combines several rendered tracks into one by averaging them.
///
/// The mix is as long as the longest track. At every index the samples of
/// all tracks are summed, counting a track that has already ended as
/// silence, and the sum is divided by the number of tracks.
///
/// # Examples
///
/// ```
/// use staffsynth::render::Mixer;
///
/// let mut mixer = Mixer::new();
/// mixer.add_track(vec![1.0, 1.0]);
/// mixer.add_track(vec![3.0]);
/// assert_eq!(mixer.mix(), vec![2.0, 0.5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mixer {
    tracks: Vec<Vec<f64>>,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rendered track to the mix.
    pub fn add_track(&mut self, track: Vec<f64>) {
        self.tracks.push(track);
    }

    /// Number of tracks added so far.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Averages every track into one buffer.
    ///
    /// # Returns
    ///
    /// The mixed samples, or an empty buffer when no track was added
    pub fn mix(&self) -> Vec<f64> {
        let len = self.tracks.iter().map(Vec::len).max().unwrap_or(0);
        let mut mixed = vec![0.0; len];
        for track in &self.tracks {
            for (out, &sample) in mixed.iter_mut().zip(track) {
                *out += sample;
            }
        }

        let count = self.tracks.len() as f64;
        for sample in &mut mixed {
            *sample /= count;
        }
        debug!("mixed {} tracks into {} samples", self.tracks.len(), len);
        mixed
    }
}

impl FromIterator<Vec<f64>> for Mixer {
    fn from_iter<I: IntoIterator<Item = Vec<f64>>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}
