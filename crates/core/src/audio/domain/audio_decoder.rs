use std::path::Path;

use super::audio_track::AudioTrack;

/// Domain interface for decoding an audio file into an [`AudioTrack`].
///
/// Decode failure is fatal to a pipeline run: there is nothing to analyze
/// without a waveform.
pub trait AudioDecoder: Send {
    fn decode(&self, path: &Path) -> Result<AudioTrack, Box<dyn std::error::Error>>;
}
