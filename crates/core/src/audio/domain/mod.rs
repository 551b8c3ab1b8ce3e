pub mod audio_decoder;
pub mod audio_track;
pub mod segment;
pub mod segmenter;
