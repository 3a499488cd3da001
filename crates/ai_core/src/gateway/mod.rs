//! OpenAI-compatible AI gateway provider

mod client;

pub use client::GatewayClient;
