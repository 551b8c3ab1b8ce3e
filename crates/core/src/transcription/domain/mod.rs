pub mod speech_recognizer;
pub mod transcript_outcome;
