//! Generation errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while generating email drafts
///
/// Every failure is surfaced to the immediate caller as a distinct
/// variant with a human-readable message; nothing is retried or
/// swallowed inside the pipeline.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Required API key absent from configuration
    #[error("Missing API key for {0}. Add it to your configuration before generating.")]
    MissingCredential(&'static str),

    /// Request rejected before any network call was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream returned 429
    #[error("Rate limit exceeded. Please wait a moment and try again.")]
    RateLimited,

    /// Upstream returned 401 or 403
    #[error("Invalid API key. Please check your configured credential.")]
    Unauthorized,

    /// Upstream returned 402 (gateway path)
    #[error("AI credits depleted. Please add credits to continue.")]
    QuotaExceeded,

    /// Any other non-2xx, or a success envelope missing expected fields
    #[error("Upstream failure: {message}")]
    UpstreamFailure {
        status: Option<u16>,
        message: String,
    },

    /// Completion text is not parseable JSON
    #[error("AI returned invalid JSON: {0}")]
    MalformedOutput(String),

    /// Parsed JSON lacks the expected variations array
    #[error("Invalid completion structure: {0}")]
    InvalidStructure(String),

    /// Variations array present but has the wrong length
    #[error("Expected 3 email variations, got {0}")]
    WrongVariationCount(usize),

    /// A variation entry is missing subject, body, or tone
    #[error("Email variation {position} is missing required field: {field}")]
    IncompleteVariation { position: usize, field: String },

    /// Failed to reach the provider at all
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Transport-level timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),
}

impl GenerationError {
    /// Map a non-2xx upstream status to the matching error kind
    ///
    /// The provider's own message, when present, rides along on the
    /// generic variant to aid diagnosis.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            429 => Self::RateLimited,
            401 | 403 => Self::Unauthorized,
            402 => Self::QuotaExceeded,
            _ => Self::UpstreamFailure {
                status: Some(status),
                message: message.into(),
            },
        }
    }

    /// Missing or non-textual fields in an otherwise successful envelope
    #[must_use]
    pub fn invalid_envelope(provider: &str) -> Self {
        Self::UpstreamFailure {
            status: None,
            message: format!("Invalid response envelope from {provider}"),
        }
    }

    /// Map a transport-level failure, reporting the configured timeout
    #[must_use]
    pub fn from_transport(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::UpstreamFailure {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            }
        }
    }
}

impl From<DomainError> for GenerationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::WrongVariationCount { actual, .. } => Self::WrongVariationCount(actual),
            DomainError::IncompleteVariation { position, field } => {
                Self::IncompleteVariation { position, field }
            },
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
