use thiserror::Error;

use crate::audio::domain::audio_track::AudioTrack;

/// Why a segment could not be transcribed.
///
/// The two cases are exhaustive: adapters must fold every internal
/// failure into one of them so the pipeline can keep processing the
/// remaining segments.
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("no speech could be recognized")]
    NoSpeech,
    #[error("speech service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Domain interface for speech-to-text transcription of one segment.
///
/// One synchronous attempt per call, no retry.
pub trait SpeechRecognizer: Send {
    fn recognize(&self, audio: &AudioTrack) -> Result<String, RecognitionError>;
}
