// src/services/gemini.rs
use std::{fmt, time::Duration};

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: Some(text.into()) }],
        }
    }
}

// Every level is optional so a partial payload still parses and the
// missing piece can be reported precisely.
#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Why no reply text could be found in an upstream payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReply {
    Malformed,
    NoCandidates,
    NoContent,
    NoParts,
    EmptyText,
}

impl fmt::Display for MissingReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MissingReply::Malformed => "payload does not match the expected shape",
            MissingReply::NoCandidates => "no candidates",
            MissingReply::NoContent => "first candidate has no content",
            MissingReply::NoParts => "first candidate has no parts",
            MissingReply::EmptyText => "first part has no text",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request to Gemini API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API returned {status}")]
    Status { status: StatusCode, body: Value },

    #[error("Gemini API response invalid or empty: {reason}")]
    EmptyReply { reason: MissingReply, raw: Value },
}

/// Finds the text of the first part of the first candidate.
pub fn extract_reply(raw: &Value) -> Result<String, MissingReply> {
    let response: GenerateContentResponse =
        serde_json::from_value(raw.clone()).map_err(|_| MissingReply::Malformed)?;

    let candidate = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .ok_or(MissingReply::NoCandidates)?;
    let content = candidate.content.ok_or(MissingReply::NoContent)?;
    let part = content.parts.into_iter().next().ok_or(MissingReply::NoParts)?;

    match part.text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(MissingReply::EmptyText),
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_url: String,
}

impl GeminiClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, GeminiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Grounding prompt first, then the caller's message, both as user turns.
    pub fn build_request(prompt: &str, message: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(prompt), Content::user(message)],
        }
    }

    /// Sends one `generateContent` call and returns the reply text.
    pub async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        message: &str,
    ) -> Result<String, GeminiError> {
        let request = Self::build_request(prompt, message);

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the key in its query string.
                let e = e.without_url();
                error!("Error calling Gemini API: {}", e);
                GeminiError::Transport(e)
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("Error reading Gemini API response: {}", e);
                GeminiError::Transport(e)
            })?;
        let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                error!("Error calling Gemini API: 429 Too Many Requests (quota exceeded)");
            } else {
                error!(%status, body = %body, "Error calling Gemini API");
            }
            return Err(GeminiError::Status { status, body });
        }

        match extract_reply(&body) {
            Ok(reply) => {
                debug!(reply = %reply, "extracted reply");
                Ok(reply)
            }
            Err(reason) => {
                warn!(
                    %reason,
                    "Gemini API response missing text. Full response: {}",
                    serde_json::to_string_pretty(&body).unwrap_or_default()
                );
                Err(GeminiError::EmptyReply { reason, raw: body })
            }
        }
    }
}
