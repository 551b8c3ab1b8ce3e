use std::time::Instant;

use crate::audio::domain::audio_track::AudioTrack;
use crate::audio::domain::segmenter::segment_windows;
use crate::emotion::domain::emotion_classifier::EmotionClassifier;
use crate::emotion::domain::emotion_score::EmotionScore;
use crate::shared::constants::SEGMENT_WINDOW_MS;
use crate::transcription::domain::speech_recognizer::{RecognitionError, SpeechRecognizer};
use crate::transcription::domain::transcript_outcome::TranscriptOutcome;

use super::pipeline_logger::PipelineLogger;
use super::segment_aggregator::SegmentAggregator;
use super::segment_record::SegmentRecord;

/// Orchestrates the segment → transcribe → classify → aggregate pipeline
/// for one decoded track.
///
/// Segments are processed strictly in order: each segment's recognition
/// and classification complete before the next segment begins. Both
/// external calls are blocking with no timeout, so a hung service stalls
/// the run.
pub struct AnalyzeAudioUseCase {
    recognizer: Box<dyn SpeechRecognizer>,
    classifier: Box<dyn EmotionClassifier>,
    logger: Box<dyn PipelineLogger>,
}

impl AnalyzeAudioUseCase {
    pub fn new(
        recognizer: Box<dyn SpeechRecognizer>,
        classifier: Box<dyn EmotionClassifier>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            recognizer,
            classifier,
            logger,
        }
    }

    /// Analyze a decoded track into its emotion timeline.
    ///
    /// Every segment yields exactly one record: per-segment failures are
    /// recorded as data, never propagated. A zero-duration track yields
    /// an empty timeline.
    pub fn execute(&mut self, track: &AudioTrack) -> Vec<SegmentRecord> {
        let segments = segment_windows(track.duration_ms(), SEGMENT_WINDOW_MS);
        let total = segments.len();
        let mut timeline = Vec::with_capacity(total);

        for (index, segment) in segments.iter().enumerate() {
            let chunk = track.window(segment.start_ms(), segment.end_ms());

            let started = Instant::now();
            let outcome = match self.recognizer.recognize(&chunk) {
                Ok(text) if text.trim().is_empty() => TranscriptOutcome::Inaudible,
                Ok(text) => TranscriptOutcome::Text(text),
                Err(RecognitionError::NoSpeech) => TranscriptOutcome::Inaudible,
                Err(RecognitionError::ServiceUnavailable(reason)) => {
                    log::warn!("segment {index}: speech service unavailable: {reason}");
                    TranscriptOutcome::ServiceUnavailable
                }
            };
            self.logger
                .timing("transcribe", started.elapsed().as_secs_f64() * 1000.0);

            let emotions = match &outcome {
                TranscriptOutcome::Text(text) => {
                    let started = Instant::now();
                    let scores = match self.classifier.classify(text) {
                        Ok(scores) => scores,
                        Err(e) => {
                            log::warn!("segment {index}: emotion scoring failed: {e}");
                            EmotionScore::empty()
                        }
                    };
                    self.logger
                        .timing("classify", started.elapsed().as_secs_f64() * 1000.0);
                    scores
                }
                _ => EmotionScore::empty(),
            };

            timeline.push(SegmentAggregator::aggregate(segment, outcome, emotions));
            self.logger.progress(index + 1, total);
        }

        self.logger.summary();
        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::domain::emotion_classifier::ClassificationError;
    use crate::pipeline::pipeline_logger::NullPipelineLogger;
    use approx::assert_relative_eq;
    use std::sync::{Arc, Mutex};

    // ─── Stubs ───

    struct StubRecognizer {
        transcript: Result<String, fn() -> RecognitionError>,
        calls: Arc<Mutex<Vec<u64>>>,
    }

    impl StubRecognizer {
        fn ok(text: &str) -> Self {
            Self {
                transcript: Ok(text.to_string()),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn err(make: fn() -> RecognitionError) -> Self {
            Self {
                transcript: Err(make),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl SpeechRecognizer for StubRecognizer {
        fn recognize(&self, audio: &AudioTrack) -> Result<String, RecognitionError> {
            self.calls.lock().unwrap().push(audio.duration_ms());
            match &self.transcript {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    struct StubClassifier {
        scores: Result<EmotionScore, String>,
        called: Arc<Mutex<usize>>,
    }

    impl StubClassifier {
        fn ok(values: &[(&str, f64)]) -> Self {
            Self {
                scores: Ok(EmotionScore::from_pairs(
                    values.iter().map(|(l, s)| (l.to_string(), *s)).collect(),
                )),
                called: Arc::new(Mutex::new(0)),
            }
        }

        fn err(reason: &str) -> Self {
            Self {
                scores: Err(reason.to_string()),
                called: Arc::new(Mutex::new(0)),
            }
        }
    }

    impl EmotionClassifier for StubClassifier {
        fn classify(&self, _text: &str) -> Result<EmotionScore, ClassificationError> {
            *self.called.lock().unwrap() += 1;
            match &self.scores {
                Ok(scores) => Ok(scores.clone()),
                Err(reason) => Err(ClassificationError::ServiceUnavailable(reason.clone())),
            }
        }
    }

    struct StubLogger {
        progress: Arc<Mutex<Vec<(usize, usize)>>>,
        summarized: Arc<Mutex<bool>>,
    }

    impl StubLogger {
        fn new() -> Self {
            Self {
                progress: Arc::new(Mutex::new(Vec::new())),
                summarized: Arc::new(Mutex::new(false)),
            }
        }
    }

    impl PipelineLogger for StubLogger {
        fn progress(&mut self, current: usize, total: usize) {
            self.progress.lock().unwrap().push((current, total));
        }
        fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
        fn info(&mut self, _message: &str) {}
        fn summary(&self) {
            *self.summarized.lock().unwrap() = true;
        }
    }

    fn track_of_seconds(seconds: usize) -> AudioTrack {
        AudioTrack::new(vec![0.0; seconds * 16000], 16000)
    }

    fn use_case(
        recognizer: StubRecognizer,
        classifier: StubClassifier,
    ) -> AnalyzeAudioUseCase {
        AnalyzeAudioUseCase::new(
            Box::new(recognizer),
            Box::new(classifier),
            Box::new(NullPipelineLogger),
        )
    }

    const HAPPY_SCORES: &[(&str, f64)] = &[
        ("joy", 92.3),
        ("neutral", 4.1),
        ("sadness", 1.2),
        ("anger", 0.9),
        ("fear", 0.8),
        ("surprise", 0.5),
        ("disgust", 0.2),
    ];

    #[test]
    fn test_timeline_length_equals_segment_count() {
        let mut uc = use_case(
            StubRecognizer::ok("I am happy today"),
            StubClassifier::ok(HAPPY_SCORES),
        );
        let timeline = uc.execute(&track_of_seconds(25));
        assert_eq!(timeline.len(), 3);
    }

    #[test]
    fn test_segments_are_chronological_with_expected_labels() {
        let mut uc = use_case(
            StubRecognizer::ok("hello"),
            StubClassifier::ok(HAPPY_SCORES),
        );
        let timeline = uc.execute(&track_of_seconds(25));

        let labels: Vec<&str> = timeline.iter().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(labels, vec!["0:00 - 0:10", "0:10 - 0:20", "0:20 - 0:25"]);
        assert_eq!(
            timeline.iter().map(|r| r.start_seconds).collect::<Vec<_>>(),
            vec![0, 10, 20]
        );
    }

    #[test]
    fn test_transcribed_segment_carries_dominant_emotion() {
        let mut uc = use_case(
            StubRecognizer::ok("I am happy today"),
            StubClassifier::ok(HAPPY_SCORES),
        );
        let timeline = uc.execute(&track_of_seconds(5));

        assert_eq!(timeline.len(), 1);
        let record = &timeline[0];
        assert_eq!(record.text.as_str(), "I am happy today");
        assert_eq!(record.top_emotion, "joy");
        assert_relative_eq!(record.confidence, 92.3);
        assert_eq!(record.all_emotions.len(), 7);
    }

    #[test]
    fn test_unreachable_service_yields_sentinel_record() {
        let mut uc = use_case(
            StubRecognizer::err(|| {
                RecognitionError::ServiceUnavailable("connection refused".to_string())
            }),
            StubClassifier::ok(HAPPY_SCORES),
        );
        let timeline = uc.execute(&track_of_seconds(5));

        let record = &timeline[0];
        assert_eq!(record.text, TranscriptOutcome::ServiceUnavailable);
        assert_eq!(record.text.as_str(), "[speech service unavailable]");
        assert_eq!(record.top_emotion, "unknown");
        assert_eq!(record.confidence, 0.0);
        assert!(record.all_emotions.is_empty());
    }

    #[test]
    fn test_no_speech_yields_inaudible_record() {
        let mut uc = use_case(
            StubRecognizer::err(|| RecognitionError::NoSpeech),
            StubClassifier::ok(HAPPY_SCORES),
        );
        let timeline = uc.execute(&track_of_seconds(5));
        assert_eq!(timeline[0].text, TranscriptOutcome::Inaudible);
        assert_eq!(timeline[0].top_emotion, "unknown");
    }

    #[test]
    fn test_classifier_not_invoked_for_sentinels() {
        let classifier = StubClassifier::ok(HAPPY_SCORES);
        let called = classifier.called.clone();
        let mut uc = use_case(StubRecognizer::err(|| RecognitionError::NoSpeech), classifier);

        uc.execute(&track_of_seconds(25));
        assert_eq!(*called.lock().unwrap(), 0);
    }

    #[test]
    fn test_classifier_invoked_once_per_transcribed_segment() {
        let classifier = StubClassifier::ok(HAPPY_SCORES);
        let called = classifier.called.clone();
        let mut uc = use_case(StubRecognizer::ok("hello"), classifier);

        uc.execute(&track_of_seconds(25));
        assert_eq!(*called.lock().unwrap(), 3);
    }

    #[test]
    fn test_classification_failure_degrades_to_unknown() {
        let mut uc = use_case(
            StubRecognizer::ok("hello"),
            StubClassifier::err("model offline"),
        );
        let timeline = uc.execute(&track_of_seconds(5));

        let record = &timeline[0];
        assert!(record.text.is_text());
        assert_eq!(record.top_emotion, "unknown");
        assert_eq!(record.confidence, 0.0);
        assert!(record.all_emotions.is_empty());
    }

    #[test]
    fn test_empty_transcript_is_normalized_to_inaudible() {
        let mut uc = use_case(StubRecognizer::ok("   "), StubClassifier::ok(HAPPY_SCORES));
        let timeline = uc.execute(&track_of_seconds(5));
        assert_eq!(timeline[0].text, TranscriptOutcome::Inaudible);
    }

    #[test]
    fn test_zero_duration_track_yields_empty_timeline() {
        let mut uc = use_case(
            StubRecognizer::ok("hello"),
            StubClassifier::ok(HAPPY_SCORES),
        );
        let timeline = uc.execute(&AudioTrack::new(Vec::new(), 16000));
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_every_segment_failing_still_fills_the_timeline() {
        let mut uc = use_case(
            StubRecognizer::err(|| {
                RecognitionError::ServiceUnavailable("down".to_string())
            }),
            StubClassifier::ok(HAPPY_SCORES),
        );
        let timeline = uc.execute(&track_of_seconds(47));

        assert_eq!(timeline.len(), 5);
        assert!(timeline
            .iter()
            .all(|r| r.text == TranscriptOutcome::ServiceUnavailable));
    }

    #[test]
    fn test_recognizer_receives_window_sized_chunks() {
        let recognizer = StubRecognizer::ok("hello");
        let calls = recognizer.calls.clone();
        let mut uc = use_case(recognizer, StubClassifier::ok(HAPPY_SCORES));

        uc.execute(&track_of_seconds(25));
        assert_eq!(*calls.lock().unwrap(), vec![10_000, 10_000, 5_000]);
    }

    #[test]
    fn test_rerun_with_deterministic_collaborators_is_identical() {
        let track = track_of_seconds(25);

        let mut first_uc = use_case(
            StubRecognizer::ok("I am happy today"),
            StubClassifier::ok(HAPPY_SCORES),
        );
        let first = first_uc.execute(&track);

        let mut second_uc = use_case(
            StubRecognizer::ok("I am happy today"),
            StubClassifier::ok(HAPPY_SCORES),
        );
        let second = second_uc.execute(&track);

        assert_eq!(first, second);
    }

    #[test]
    fn test_progress_and_summary_reported() {
        let logger = StubLogger::new();
        let progress = logger.progress.clone();
        let summarized = logger.summarized.clone();

        let mut uc = AnalyzeAudioUseCase::new(
            Box::new(StubRecognizer::ok("hello")),
            Box::new(StubClassifier::ok(HAPPY_SCORES)),
            Box::new(logger),
        );
        uc.execute(&track_of_seconds(25));

        assert_eq!(*progress.lock().unwrap(), vec![(1, 3), (2, 3), (3, 3)]);
        assert!(*summarized.lock().unwrap());
    }
}
