use std::io::BufWriter;
use std::path::Path;

use tempfile::TempPath;
use thiserror::Error;

use crate::audio::domain::audio_track::AudioTrack;

#[derive(Debug, Error)]
pub enum WavExportError {
    #[error("failed to create segment artifact: {0}")]
    Create(#[source] std::io::Error),
    #[error("failed to encode segment artifact: {0}")]
    Encode(#[source] hound::Error),
}

/// Transient per-segment WAV file handed to the recognition service.
///
/// Each artifact lives at a uniquely named temp path owned by exactly one
/// segment; the file is removed when the artifact drops, on every exit
/// path of that segment's processing.
pub struct WavArtifact {
    path: TempPath,
}

impl WavArtifact {
    /// Encode the segment's samples as 16-bit PCM WAV.
    pub fn write(audio: &AudioTrack) -> Result<Self, WavExportError> {
        let file = tempfile::Builder::new()
            .prefix("segment-")
            .suffix(".wav")
            .tempfile()
            .map_err(WavExportError::Create)?;

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: audio.sample_rate(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::new(BufWriter::new(file.as_file()), spec)
            .map_err(WavExportError::Encode)?;
        for &sample in audio.samples() {
            let pcm = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer.write_sample(pcm).map_err(WavExportError::Encode)?;
        }
        writer.finalize().map_err(WavExportError::Encode)?;

        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
