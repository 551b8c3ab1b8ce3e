use serde::Deserialize;
use serde_json::json;

use crate::emotion::domain::emotion_classifier::{ClassificationError, EmotionClassifier};
use crate::emotion::domain::emotion_score::EmotionScore;
use crate::shared::constants::EMOTION_CATEGORIES;

/// Emotion classifier backed by a hosted multi-label text-classification
/// model.
///
/// One synchronous JSON request per transcript, no retry. The client is
/// built once in the constructor and shared read-only by every call.
pub struct HttpEmotionClassifier {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpEmotionClassifier {
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
struct LabelScore {
    label: String,
    score: f64,
}

/// Parse the model's multi-label response.
///
/// Scoring every label for a single input arrives as `[[{label, score}]]`;
/// some deployments flatten that to `[{label, score}]`. Both are
/// accepted. The response must cover the full category set.
fn parse_scores(body: &str) -> Result<EmotionScore, ClassificationError> {
    let flat: Vec<LabelScore> = match serde_json::from_str::<Vec<Vec<LabelScore>>>(body) {
        Ok(nested) => nested
            .into_iter()
            .next()
            .ok_or_else(|| ClassificationError::MalformedResponse("empty response".to_string()))?,
        Err(_) => serde_json::from_str(body)
            .map_err(|e| ClassificationError::MalformedResponse(e.to_string()))?,
    };

    let score = EmotionScore::from_probabilities(flat.into_iter().map(|ls| (ls.label, ls.score)));

    for category in EMOTION_CATEGORIES {
        if score.get(category).is_none() {
            return Err(ClassificationError::MalformedResponse(format!(
                "missing category: {category}"
            )));
        }
    }

    Ok(score)
}

impl EmotionClassifier for HttpEmotionClassifier {
    fn classify(&self, text: &str) -> Result<EmotionScore, ClassificationError> {
        log::debug!("scoring {} chars against {}", text.len(), self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "inputs": text }));
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .map_err(|e| ClassificationError::ServiceUnavailable(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ClassificationError::ServiceUnavailable(format!(
                "status {status}: {body}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| ClassificationError::ServiceUnavailable(format!("read response: {e}")))?;

        parse_scores(&body)
    }
}
