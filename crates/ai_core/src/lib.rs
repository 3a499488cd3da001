//! AI Core - Email draft generation pipeline
//!
//! Builds prompts from an [`domain::EmailRequest`], calls a hosted LLM
//! provider, and validates the JSON completion into a
//! [`domain::VariationSet`] of exactly three drafts. Two providers are
//! supported behind the same [`DraftGenerator`] port: the Gemini
//! `generateContent` API and an OpenAI-compatible AI gateway.

pub mod completion;
pub mod config;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod ports;
pub mod prompt;

pub use config::{AiConfig, GatewayConfig, GeminiConfig, ProviderKind};
pub use error::GenerationError;
pub use gateway::GatewayClient;
pub use gemini::GeminiClient;
pub use ports::DraftGenerator;
