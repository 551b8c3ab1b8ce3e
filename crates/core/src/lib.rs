pub mod audio;
pub mod emotion;
pub mod pipeline;
pub mod shared;
pub mod transcription;
