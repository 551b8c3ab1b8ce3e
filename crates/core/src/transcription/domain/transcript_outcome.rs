use std::fmt;

use serde::{Serialize, Serializer};

/// Result of transcribing one segment.
///
/// Failures are data, not errors: the pipeline records them in the
/// timeline and keeps going. Sentinels serialize as the fixed strings the
/// presentation layers render inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptOutcome {
    /// Recognized speech, never empty.
    Text(String),
    /// The service understood the audio but found no speech in it.
    Inaudible,
    /// The service was unreachable or failed transiently.
    ServiceUnavailable,
}

impl TranscriptOutcome {
    pub const INAUDIBLE_LABEL: &'static str = "[inaudible]";
    pub const SERVICE_UNAVAILABLE_LABEL: &'static str = "[speech service unavailable]";

    pub fn is_text(&self) -> bool {
        matches!(self, TranscriptOutcome::Text(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            TranscriptOutcome::Text(text) => text,
            TranscriptOutcome::Inaudible => Self::INAUDIBLE_LABEL,
            TranscriptOutcome::ServiceUnavailable => Self::SERVICE_UNAVAILABLE_LABEL,
        }
    }
}

impl fmt::Display for TranscriptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TranscriptOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
