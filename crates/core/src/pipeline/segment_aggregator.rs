use crate::audio::domain::segment::Segment;
use crate::emotion::domain::emotion_score::EmotionScore;
use crate::shared::constants::UNKNOWN_EMOTION;
use crate::transcription::domain::transcript_outcome::TranscriptOutcome;

use super::segment_record::SegmentRecord;

pub struct SegmentAggregator;

impl SegmentAggregator {
    /// Reshape one segment's already-computed outputs into its record.
    ///
    /// Pure: no side effects, no failure modes. An empty score set (a
    /// sentinel transcript, or a failed classification) yields the
    /// unknown emotion at confidence 0.
    pub fn aggregate(
        segment: &Segment,
        text: TranscriptOutcome,
        emotions: EmotionScore,
    ) -> SegmentRecord {
        let (top_emotion, confidence) = match emotions.dominant() {
            Some((label, score)) => (label.to_string(), score),
            None => (UNKNOWN_EMOTION.to_string(), 0.0),
        };

        SegmentRecord {
            timestamp: segment.label(),
            start_seconds: segment.start_seconds(),
            text,
            top_emotion,
            confidence,
            all_emotions: emotions,
        }
    }
}
