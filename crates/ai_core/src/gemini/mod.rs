//! Gemini `generateContent` provider

mod client;

pub use client::GeminiClient;
