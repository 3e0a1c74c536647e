//! Text generation backend.
//!
//! [`TextGenerator`] is the seam between the description generator and the
//! network. [`GeminiClient`] is the production implementation: one blocking
//! `generateContent` request per call, no retries.

use std::time::Duration;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{Result, ShipError};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default Gemini model used for PR descriptions.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// A single-shot text generation call.
pub trait TextGenerator {
    fn generate_text(&self, prompt: &str) -> Result<String>;
}

/// Blocking client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: if model.is_empty() {
                DEFAULT_MODEL.to_string()
            } else {
                model.to_string()
            },
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate_text(&self, prompt: &str) -> Result<String> {
        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ]
        });

        debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(ShipError::GenerationFailed(format!(
                "Gemini API request failed with status {}: {}",
                status,
                text.trim()
            )));
        }

        let body: Value = response.json()?;
        extract_text(&body)
    }
}

/// Pull the generated text out of a `generateContent` response.
///
/// Text parts of the first candidate are concatenated. A response without any
/// non-blank text is an error.
pub fn extract_text(body: &Value) -> Result<String> {
    let parts = body["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| {
            ShipError::GenerationFailed("response has no candidate content".to_string())
        })?;

    let text: String = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();

    if text.trim().is_empty() {
        return Err(ShipError::GenerationFailed(
            "response contained no text".to_string(),
        ));
    }

    Ok(text)
}
