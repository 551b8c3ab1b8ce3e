pub mod http_speech_recognizer;
pub mod wav_artifact;
