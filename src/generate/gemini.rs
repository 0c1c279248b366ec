//! Gemini image generation over the `generateContent` REST endpoint.
//!
//! One blocking request per call. No retries: a failed call is reported to
//! the batch runner, which records it and moves on.

use std::time::Duration;

use base64::Engine as _;
use serde::Deserialize;

use crate::types::Model;

use super::{GenerateError, ImageGenerator};

pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 180;
/// Inline images are base64 in the JSON body, so allow large responses.
const MAX_RESPONSE_BYTES: u64 = 64 * 1024 * 1024;

/// Gemini client for image generation.
pub struct GeminiClient {
    api_url: String,
    agent: ureq::Agent,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiClient {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_GEMINI_URL)
    }

    /// Client against a different API base URL (e.g. a proxy).
    pub fn with_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            agent: build_agent(),
        }
    }

    fn endpoint(&self, model: Model) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            model.id()
        )
    }
}

fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .http_status_as_error(false)
        .build();
    config.into()
}

/// Request body asking for text and image output.
fn request_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "responseModalities": ["TEXT", "IMAGE"]
        }
    })
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(default)]
    data: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the first inline image out of the first candidate.
fn extract_image(response: &GenerateContentResponse) -> Result<Vec<u8>, GenerateError> {
    let parts = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|c| c.parts.as_slice())
        .unwrap_or_default();

    let inline = parts
        .iter()
        .filter_map(|p| p.inline_data.as_ref())
        .find(|d| !d.data.is_empty());

    match inline {
        Some(inline) => base64::engine::general_purpose::STANDARD
            .decode(&inline.data)
            .map_err(|e| GenerateError::Decode(e.to_string())),
        None => {
            let text: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
            Err(GenerateError::NoImage {
                text: (!text.is_empty()).then(|| text.join(" ")),
            })
        }
    }
}

/// Best-effort message from an error response body.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => format!("HTTP {}: {}", status, parsed.error.message),
        Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
        Err(_) => format!("HTTP {}: {}", status, body.trim()),
    }
}

impl ImageGenerator for GeminiClient {
    fn generate(&self, prompt: &str, credential: &str, model: Model) -> Result<Vec<u8>, GenerateError> {
        let mut response = self
            .agent
            .post(self.endpoint(model))
            .header("x-goog-api-key", credential)
            .send_json(request_body(prompt))
            .map_err(|e| GenerateError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_RESPONSE_BYTES)
            .read_to_string()
            .map_err(|e| GenerateError::Request(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(GenerateError::Request(error_message(status.as_u16(), &body)));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GenerateError::Request(format!("failed to parse response: {}", e)))?;

        extract_image(&parsed)
    }
}
