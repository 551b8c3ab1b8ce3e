use std::fs;

use reqwest::blocking::multipart;
use serde::Deserialize;

use crate::audio::domain::audio_track::AudioTrack;
use crate::transcription::domain::speech_recognizer::{RecognitionError, SpeechRecognizer};

use super::wav_artifact::WavArtifact;

/// Speech recognizer backed by an HTTP transcription service.
///
/// Sends one multipart request per segment, no retry. Every failure on
/// the way (artifact export, transport, HTTP status, response parsing)
/// is folded into `ServiceUnavailable` so the pipeline can continue with
/// the remaining segments.
pub struct HttpSpeechRecognizer {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpSpeechRecognizer {
    pub fn new(endpoint: &str, api_key: Option<&str>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Fold the service's transcript into the recognition contract:
/// whitespace-only text means the audio carried no recognizable speech.
fn transcript_from_response(text: &str) -> Result<String, RecognitionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RecognitionError::NoSpeech);
    }
    Ok(trimmed.to_string())
}

impl SpeechRecognizer for HttpSpeechRecognizer {
    fn recognize(&self, audio: &AudioTrack) -> Result<String, RecognitionError> {
        // The artifact is deleted when it drops, on every return path.
        let artifact = WavArtifact::write(audio)
            .map_err(|e| RecognitionError::ServiceUnavailable(format!("segment export: {e}")))?;

        let bytes = fs::read(artifact.path())
            .map_err(|e| RecognitionError::ServiceUnavailable(format!("segment read: {e}")))?;
        let part = multipart::Part::bytes(bytes)
            .file_name("segment.wav")
            .mime_str("audio/wav")
            .map_err(|e| RecognitionError::ServiceUnavailable(format!("mime: {e}")))?;
        let form = multipart::Form::new().part("file", part);

        log::debug!(
            "sending {}ms segment to {}",
            audio.duration_ms(),
            self.endpoint
        );

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(ref key) = self.api_key {
            request = request.header("api-key", key);
        }

        let response = request
            .send()
            .map_err(|e| RecognitionError::ServiceUnavailable(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionError::ServiceUnavailable(format!(
                "status {status}: {body}"
            )));
        }

        let result: TranscriptionResponse = response
            .json()
            .map_err(|e| RecognitionError::ServiceUnavailable(format!("parse response: {e}")))?;

        transcript_from_response(&result.text)
    }
}
