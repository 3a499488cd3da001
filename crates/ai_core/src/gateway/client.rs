//! AI gateway client implementation

use std::time::Duration;

use async_trait::async_trait;
use domain::{EmailRequest, VariationSet};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    completion::{EnvelopeField, parse_variations},
    config::GatewayConfig,
    error::GenerationError,
    ports::DraftGenerator,
    prompt,
};

/// Draft generator backed by an OpenAI-compatible chat-completions gateway
///
/// The request fields travel in the system message and the raw context
/// as the user message; the completion carries a `variations` array
/// whose entries omit per-entry tone, which the adapter backfills with
/// the requested tone before validation.
pub struct GatewayClient {
    client: Client,
    config: GatewayConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl GatewayClient {
    /// Create a new gateway client
    pub fn new(config: GatewayConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(GenerationError::MissingCredential("gateway"))?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GenerationError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized gateway draft generator"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the chat-completions URL
    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

/// OpenAI-format chat request
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// OpenAI-format success envelope
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Pull the single completion text out of the envelope
    fn completion_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

#[async_trait]
impl DraftGenerator for GatewayClient {
    #[instrument(skip(self, request), fields(provider = "gateway", model = %self.config.model))]
    async fn generate(&self, request: &EmailRequest) -> Result<VariationSet, GenerationError> {
        // Fail fast before building a prompt or touching the network
        request.validate()?;

        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::gateway_system_prompt(request),
                },
                ChatMessage {
                    role: "user",
                    content: request.context.clone(),
                },
            ],
        };

        debug!("Sending chat-completions request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::from_transport(e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Gateway request failed");
            return Err(GenerationError::from_status(
                status.as_u16(),
                if body.is_empty() {
                    format!("AI Gateway error: {status}")
                } else {
                    body
                },
            ));
        }

        let envelope: ChatResponse = response
            .json()
            .await
            .map_err(|_| GenerationError::invalid_envelope("gateway"))?;

        let completion = envelope
            .completion_text()
            .ok_or_else(|| GenerationError::invalid_envelope("gateway"))?;

        parse_variations(
            &completion,
            EnvelopeField::Variations,
            Some(request.tone.label()),
        )
    }

    fn provider(&self) -> &'static str {
        "gateway"
    }
}
