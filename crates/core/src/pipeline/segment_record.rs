use serde::Serialize;

use crate::emotion::domain::emotion_score::EmotionScore;
use crate::transcription::domain::transcript_outcome::TranscriptOutcome;

/// One fully analyzed segment: the atomic element of the timeline.
///
/// Field names are the wire contract consumed by the presentation layers;
/// `all_emotions` serializes as a map in the classifier's native order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentRecord {
    /// Display time range, "M:SS - M:SS".
    pub timestamp: String,
    pub start_seconds: u64,
    pub text: TranscriptOutcome,
    pub top_emotion: String,
    pub confidence: f64,
    pub all_emotions: EmotionScore,
}
