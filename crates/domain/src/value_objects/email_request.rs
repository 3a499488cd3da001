//! Draft request value object

use serde::{Deserialize, Serialize};

use crate::{
    errors::DomainError,
    value_objects::{DraftLength, Relationship, Tone},
};

/// Minimum trimmed context length accepted for generation
///
/// Anything shorter gives the model too little to work with; the check
/// runs before any network call is attempted. The 500-character upper
/// bound is enforced by the collecting surface, not here.
pub const MIN_CONTEXT_CHARS: usize = 10;

/// One email-drafting request, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    /// Free-text description of what the email should say
    pub context: String,
    /// Requested voice
    pub tone: Tone,
    /// Who the email is addressed to
    pub relationship: Relationship,
    /// Requested length band
    pub length: DraftLength,
}

impl EmailRequest {
    /// Create a new request
    pub fn new(
        context: impl Into<String>,
        tone: Tone,
        relationship: Relationship,
        length: DraftLength,
    ) -> Self {
        Self {
            context: context.into(),
            tone,
            relationship,
            length,
        }
    }

    /// Check that the context is long enough to generate from
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.context.trim().chars().count() < MIN_CONTEXT_CHARS {
            return Err(DomainError::ContextTooShort {
                minimum: MIN_CONTEXT_CHARS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(context: &str) -> EmailRequest {
        EmailRequest::new(
            context,
            Tone::Professional,
            Relationship::Colleague,
            DraftLength::Short,
        )
    }

    #[test]
    fn valid_context_passes() {
        let req = request("The bug fix has been deployed and tested successfully.");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn short_context_fails() {
        let req = request("too short");
        assert_eq!(
            req.validate(),
            Err(DomainError::ContextTooShort { minimum: 10 })
        );
    }

    #[test]
    fn whitespace_padding_does_not_count() {
        let req = request("   short    \n\t   ");
        assert!(req.validate().is_err());
    }

    #[test]
    fn exactly_minimum_passes() {
        let req = request("abcdefghij");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_context_fails() {
        let req = request("");
        assert!(req.validate().is_err());
    }

    #[test]
    fn serialization_roundtrip() {
        let req = request("Please reschedule our Tuesday sync to Thursday.");
        let json = serde_json::to_string(&req).expect("serialize");
        let parsed: EmailRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(req, parsed);
    }

    #[test]
    fn fields_serialize_lowercase() {
        let req = request("Some context long enough.");
        let json = serde_json::to_string(&req).expect("serialize");
        assert!(json.contains("\"professional\""));
        assert!(json.contains("\"colleague\""));
        assert!(json.contains("\"short\""));
    }
}
