//! Completion cleanup, parsing, and validation
//!
//! Shared by every provider: the raw completion text goes through fence
//! stripping, JSON parsing, structural validation, cardinality and
//! per-entry checks, and id normalization, in that order. Each step is a
//! distinct failure point with its own error kind, so prompt drift shows
//! up as a diagnosable error rather than a silent truncation.

use domain::{EmailVariation, VariationSet};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::GenerationError;

/// Name of the array field holding the variations in a completion
///
/// Providers disagree on the canonical name; each client names its own
/// field so no caller ever branches on provider identity downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeField {
    /// Gemini path: `{"emails": [...]}`
    Emails,
    /// Gateway path: `{"variations": [...]}`
    Variations,
}

impl EnvelopeField {
    /// JSON key for this field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emails => "emails",
            Self::Variations => "variations",
        }
    }
}

/// Remove markdown code-fence markers from a completion
///
/// Models frequently ignore the "no markdown" instruction, so every
/// ```json / ``` marker is stripped globally before parsing. Content
/// without fences passes through unchanged apart from trimming.
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse and validate a completion into a [`VariationSet`]
///
/// `default_tone` backfills entries whose provider schema omits the tone
/// field (the gateway path) before the completeness check runs.
pub fn parse_variations(
    completion: &str,
    field: EnvelopeField,
    default_tone: Option<&str>,
) -> Result<VariationSet, GenerationError> {
    let cleaned = strip_code_fences(completion);

    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        warn!(error = %e, "Completion is not parseable JSON");
        GenerationError::MalformedOutput(e.to_string())
    })?;

    let entries = value
        .get(field.as_str())
        .and_then(Value::as_array)
        .ok_or_else(|| {
            GenerationError::InvalidStructure(format!(
                "expected a JSON object with a \"{}\" array",
                field.as_str()
            ))
        })?;

    let mut variations = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut variation: EmailVariation =
            serde_json::from_value(entry.clone()).map_err(|e| {
                GenerationError::InvalidStructure(format!("variation entry is not an object: {e}"))
            })?;
        if variation.tone.is_empty()
            && let Some(tone) = default_tone
        {
            variation.tone = tone.to_string();
        }
        variations.push(variation);
    }

    debug!(count = variations.len(), field = field.as_str(), "Parsed completion entries");

    Ok(VariationSet::new(variations)?)
}
