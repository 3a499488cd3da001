//! Provider configuration
//!
//! All credentials are passed in explicitly; nothing in this crate reads
//! the process environment. The CLI's config layer is responsible for
//! sourcing keys from files or environment variables.

use std::str::FromStr;

use secrecy::SecretString;
use serde::Deserialize;

use crate::{
    error::GenerationError,
    gateway::GatewayClient,
    gemini::GeminiClient,
    ports::DraftGenerator,
};

/// Configuration for the Gemini `generateContent` path
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key; absence surfaces as `MissingCredential` at construction
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Base URL of the Gemini API
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Sampling temperature; 0.8 favors variety across the three drafts
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-k sampling bound
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Top-p (nucleus) sampling bound
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Output token ceiling, sized to fit three long-form drafts
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

const fn default_temperature() -> f32 {
    0.8
}

const fn default_top_k() -> u32 {
    40
}

const fn default_top_p() -> f32 {
    0.95
}

const fn default_max_output_tokens() -> u32 {
    2048
}

const fn default_timeout_ms() -> u64 {
    30000
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl GeminiConfig {
    /// Config with just a key, everything else default
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Self::default()
        }
    }
}

/// Configuration for the OpenAI-compatible AI gateway path
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Bearer token; absence surfaces as `MissingCredential` at construction
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Base URL of the gateway
    #[serde(default = "default_gateway_base_url")]
    pub base_url: String,

    /// Model identifier routed through the gateway
    #[serde(default = "default_gateway_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_gateway_base_url() -> String {
    "https://ai.gateway.lovable.dev".to_string()
}

fn default_gateway_model() -> String {
    "google/gemini-2.0-flash-exp".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gateway_base_url(),
            model: default_gateway_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl GatewayConfig {
    /// Config with just a key, everything else default
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Self::default()
        }
    }
}

/// Which provider path fulfils generation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
    Gateway,
}

impl FromStr for ProviderKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "gateway" => Ok(Self::Gateway),
            other => Err(GenerationError::InvalidInput(format!(
                "Unknown provider: {other}"
            ))),
        }
    }
}

/// Combined provider configuration with an active-path selector
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AiConfig {
    /// Active provider path
    #[serde(default)]
    pub provider: ProviderKind,

    /// Gemini path settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Gateway path settings
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl AiConfig {
    /// Build the generator for the configured provider
    ///
    /// Fails with `MissingCredential` when the active path has no key;
    /// the inactive path's key is not required.
    pub fn build_generator(&self) -> Result<Box<dyn DraftGenerator>, GenerationError> {
        match self.provider {
            ProviderKind::Gemini => Ok(Box::new(GeminiClient::new(self.gemini.clone())?)),
            ProviderKind::Gateway => Ok(Box::new(GatewayClient::new(self.gateway.clone())?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_defaults_match_generation_constants() {
        let config = GeminiConfig::default();
        assert!((config.temperature - 0.8).abs() < 0.01);
        assert_eq!(config.top_k, 40);
        assert!((config.top_p - 0.95).abs() < 0.01);
        assert_eq!(config.max_output_tokens, 2048);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn gemini_config_deserializes_with_defaults() {
        let config: GeminiConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.model, "gemini-2.0-flash-exp");
        assert_eq!(config.timeout_ms, 30000);
    }

    #[test]
    fn gemini_config_accepts_api_key() {
        let config: GeminiConfig =
            serde_json::from_str(r#"{"api_key":"test-key"}"#).expect("deserialize");
        assert!(config.api_key.is_some());
    }

    #[test]
    fn gateway_config_deserializes_with_defaults() {
        let config: GatewayConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.base_url, "https://ai.gateway.lovable.dev");
        assert_eq!(config.model, "google/gemini-2.0-flash-exp");
    }

    #[test]
    fn provider_kind_parses_both_paths() {
        assert_eq!("gemini".parse::<ProviderKind>().ok(), Some(ProviderKind::Gemini));
        assert_eq!("Gateway".parse::<ProviderKind>().ok(), Some(ProviderKind::Gateway));
    }

    #[test]
    fn provider_kind_rejects_unknown() {
        let err = "openai".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, GenerationError::InvalidInput(_)));
    }

    #[test]
    fn default_provider_is_gemini() {
        assert_eq!(ProviderKind::default(), ProviderKind::Gemini);
    }

    #[test]
    fn build_generator_without_key_fails() {
        let config = AiConfig::default();
        let err = config.build_generator().map(|_| ()).unwrap_err();
        assert!(matches!(err, GenerationError::MissingCredential("gemini")));
    }

    #[test]
    fn build_generator_for_active_path_only_needs_its_key() {
        let config = AiConfig {
            provider: ProviderKind::Gateway,
            gemini: GeminiConfig::default(),
            gateway: GatewayConfig::with_api_key("gw-key"),
        };
        let generator = config.build_generator().expect("gateway generator");
        assert_eq!(generator.provider(), "gateway");
    }

    #[test]
    fn ai_config_deserializes_from_toml_shape() {
        let json = r#"{
            "provider": "gateway",
            "gateway": {"api_key": "k", "model": "custom/model"}
        }"#;
        let config: AiConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.provider, ProviderKind::Gateway);
        assert_eq!(config.gateway.model, "custom/model");
    }
}
