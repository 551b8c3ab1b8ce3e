use thiserror::Error;

use super::emotion_score::EmotionScore;

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("emotion service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("malformed classifier response: {0}")]
    MalformedResponse(String),
}

/// Domain interface for multi-label emotion scoring of transcript text.
///
/// Called once per successfully transcribed segment, synchronously. Not
/// called for sentinel transcripts; the caller substitutes the unknown
/// emotion with an empty score set instead.
pub trait EmotionClassifier: Send {
    fn classify(&self, text: &str) -> Result<EmotionScore, ClassificationError>;
}
