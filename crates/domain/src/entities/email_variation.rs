//! One generated email draft

use serde::{Deserialize, Serialize};

/// A single generated draft as returned by a provider
///
/// The `id` is never trusted from the model; [`crate::VariationSet`]
/// rewrites it to the 1-based position on receipt. The `tone` is the
/// model's own report and may differ from the requested tone, since the
/// prompt asks for stylistic diversity across the three drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailVariation {
    /// Sequence position, 1-based, assigned locally
    #[serde(default)]
    pub id: u8,
    /// Model-reported tone label (free-form, not validated)
    #[serde(default)]
    pub tone: String,
    /// Subject line, target 6-8 words
    #[serde(default)]
    pub subject: String,
    /// Body text, paragraph breaks encoded as a double newline
    #[serde(default)]
    pub body: String,
}

impl EmailVariation {
    /// Create a variation with an explicit position
    pub fn new(
        id: u8,
        tone: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            tone: tone.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Name of the first missing required field, if any
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.subject.is_empty() {
            Some("subject")
        } else if self.body.is_empty() {
            Some("body")
        } else if self.tone.is_empty() {
            Some("tone")
        } else {
            None
        }
    }

    /// Number of paragraphs in the body (double-newline separated)
    #[must_use]
    pub fn paragraph_count(&self) -> usize {
        self.body.split("\n\n").filter(|p| !p.trim().is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_variation_has_no_missing_field() {
        let v = EmailVariation::new(1, "professional", "Subject here", "Body here.");
        assert_eq!(v.missing_field(), None);
    }

    #[test]
    fn missing_subject_is_reported_first() {
        let v = EmailVariation::new(1, "", "", "");
        assert_eq!(v.missing_field(), Some("subject"));
    }

    #[test]
    fn missing_body_is_reported_after_subject() {
        let v = EmailVariation::new(1, "", "Subject", "");
        assert_eq!(v.missing_field(), Some("body"));
    }

    #[test]
    fn missing_tone_is_reported_last() {
        let v = EmailVariation::new(1, "", "Subject", "Body");
        assert_eq!(v.missing_field(), Some("tone"));
    }

    #[test]
    fn paragraph_count_splits_on_double_newline() {
        let v = EmailVariation::new(1, "firm", "S", "First.\n\nSecond.\n\nRegards,");
        assert_eq!(v.paragraph_count(), 3);
    }

    #[test]
    fn single_paragraph_counts_as_one() {
        let v = EmailVariation::new(1, "firm", "S", "Just one line.");
        assert_eq!(v.paragraph_count(), 1);
    }

    #[test]
    fn deserializes_without_id_or_tone() {
        let json = r#"{"subject":"Hello there","body":"Hi."}"#;
        let v: EmailVariation = serde_json::from_str(json).expect("deserialize");
        assert_eq!(v.id, 0);
        assert!(v.tone.is_empty());
        assert_eq!(v.subject, "Hello there");
    }

    #[test]
    fn serialization_roundtrip() {
        let v = EmailVariation::new(2, "friendly", "Quick check-in", "Hey!\n\nCheers,");
        let json = serde_json::to_string(&v).expect("serialize");
        let parsed: EmailVariation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(v, parsed);
    }
}
