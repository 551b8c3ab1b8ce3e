/// Fixed analysis window applied to every track.
pub const SEGMENT_WINDOW_MS: u64 = 10_000;

/// All decoded audio is resampled to this rate before recognition.
pub const ANALYSIS_SAMPLE_RATE: u32 = 16_000;

/// Category set of the emotion model, in its published order.
pub const EMOTION_CATEGORIES: [&str; 7] = [
    "anger", "disgust", "fear", "joy", "neutral", "sadness", "surprise",
];

/// Label substituted when a segment has no emotion scores.
pub const UNKNOWN_EMOTION: &str = "unknown";
