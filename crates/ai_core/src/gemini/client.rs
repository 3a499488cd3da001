//! Gemini client implementation

use std::time::Duration;

use async_trait::async_trait;
use domain::{EmailRequest, VariationSet};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    completion::{EnvelopeField, parse_variations},
    config::GeminiConfig,
    error::GenerationError,
    ports::DraftGenerator,
    prompt,
};

/// Draft generator backed by the Gemini `generateContent` API
///
/// Sends the combined system + user prompt as the sole content of a
/// single-turn request; the completion is expected to carry an `emails`
/// array with exactly three entries.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// Fails with `MissingCredential` when no API key is configured;
    /// that is the single most common misconfiguration and is reported
    /// before any request is attempted.
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(GenerationError::MissingCredential("gemini"))?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GenerationError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized Gemini draft generator"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the generateContent URL for the configured model
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Gemini-format generation request
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

/// Gemini-format success envelope
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Gemini-format error envelope
#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: Option<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: Option<String>,
}

impl GeminiResponse {
    /// Pull the single completion text out of the envelope
    fn completion_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
    }
}

/// Extract the provider's message from an error body, if present
fn upstream_message(status: u16, body: &str) -> String {
    serde_json::from_str::<GeminiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| format!("API request failed with status {status}"))
}

#[async_trait]
impl DraftGenerator for GeminiClient {
    #[instrument(skip(self, request), fields(provider = "gemini", model = %self.config.model))]
    async fn generate(&self, request: &EmailRequest) -> Result<VariationSet, GenerationError> {
        // Fail fast before building a prompt or touching the network
        request.validate()?;

        let body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt::combined_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_k: self.config.top_k,
                top_p: self.config.top_p,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::from_transport(e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Gemini request failed");
            return Err(GenerationError::from_status(
                status.as_u16(),
                upstream_message(status.as_u16(), &body),
            ));
        }

        let envelope: GeminiResponse = response
            .json()
            .await
            .map_err(|_| GenerationError::invalid_envelope("gemini"))?;

        let completion = envelope
            .completion_text()
            .ok_or_else(|| GenerationError::invalid_envelope("gemini"))?;

        parse_variations(&completion, EnvelopeField::Emails, None)
    }

    fn provider(&self) -> &'static str {
        "gemini"
    }
}
