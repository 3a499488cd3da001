//! CLI configuration loading
//!
//! Layered the usual way: built-in defaults, then an optional
//! `config.toml` next to the binary, then `MAILSMITH_*` environment
//! variables. Nesting uses a double underscore so keys that contain an
//! underscore themselves survive the split
//! (`MAILSMITH_AI__GEMINI__API_KEY`, `MAILSMITH_AI__GEMINI__TIMEOUT_MS`).

use ai_core::AiConfig;
use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Provider settings for draft generation
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., MAILSMITH_AI__PROVIDER)
            .add_source(
                config::Environment::with_prefix("MAILSMITH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use ai_core::ProviderKind;
    use config::FileFormat;

    use super::*;

    fn from_toml(content: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(content, FileFormat::Toml))
            .build()
            .expect("build config")
            .try_deserialize()
            .expect("deserialize config")
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.ai.provider, ProviderKind::Gemini);
        assert!(config.ai.gemini.api_key.is_none());
        assert_eq!(config.ai.gemini.model, "gemini-2.0-flash-exp");
    }

    #[test]
    fn file_overrides_provider_and_model() {
        let config = from_toml(
            r#"
            [ai]
            provider = "gateway"

            [ai.gateway]
            api_key = "gw-secret"
            model = "custom/model"
            "#,
        );
        assert_eq!(config.ai.provider, ProviderKind::Gateway);
        assert_eq!(config.ai.gateway.model, "custom/model");
        assert!(config.ai.gateway.api_key.is_some());
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let config = from_toml(
            r#"
            [ai.gemini]
            api_key = "g-secret"
            "#,
        );
        assert!(config.ai.gemini.api_key.is_some());
        assert_eq!(
            config.ai.gemini.base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.ai.gemini.timeout_ms, 30000);
    }

    fn from_env(vars: &[(&str, &str)]) -> AppConfig {
        let source: std::collections::HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("MAILSMITH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(source)),
            )
            .build()
            .expect("build config")
            .try_deserialize()
            .expect("deserialize config")
    }

    #[test]
    fn env_api_key_reaches_provider_config() {
        let config = from_env(&[("MAILSMITH_AI__GEMINI__API_KEY", "env-secret")]);
        assert!(config.ai.gemini.api_key.is_some());
    }

    #[test]
    fn env_overrides_keys_containing_underscores() {
        let config = from_env(&[
            ("MAILSMITH_AI__PROVIDER", "gateway"),
            ("MAILSMITH_AI__GEMINI__TIMEOUT_MS", "5000"),
            ("MAILSMITH_AI__GEMINI__MAX_OUTPUT_TOKENS", "1024"),
            ("MAILSMITH_AI__GATEWAY__BASE_URL", "http://localhost:9999"),
        ]);
        assert_eq!(config.ai.provider, ProviderKind::Gateway);
        assert_eq!(config.ai.gemini.timeout_ms, 5000);
        assert_eq!(config.ai.gemini.max_output_tokens, 1024);
        assert_eq!(config.ai.gateway.base_url, "http://localhost:9999");
    }

    #[test]
    fn timeout_is_configurable() {
        let config = from_toml(
            r#"
            [ai.gemini]
            timeout_ms = 5000
            "#,
        );
        assert_eq!(config.ai.gemini.timeout_ms, 5000);
    }
}
