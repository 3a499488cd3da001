//! Email tone value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Requested voice for the generated drafts
///
/// The model is asked to diversify across variations, so the tone
/// reported per variation may differ from the one requested here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Formal, structured, complete sentences
    #[default]
    Professional,
    /// Warm, conversational, contractions welcome
    Friendly,
    /// Direct, assertive, no fluff
    Firm,
    /// Unhinged but functional
    Chaotic,
}

impl Tone {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Firm => "firm",
            Self::Chaotic => "chaotic",
        }
    }

    /// Style-guide line injected into the system prompt
    #[must_use]
    pub const fn style_guide(&self) -> &'static str {
        match self {
            Self::Professional => {
                "Professional: Formal, proper grammar, \"Best regards,\" structured, complete sentences"
            },
            Self::Friendly => {
                "Friendly: Warm, conversational, contractions OK, \"Cheers,\" approachable, shorter sentences"
            },
            Self::Firm => {
                "Firm: Direct, assertive, clear boundaries, \"Regards,\" no fluff, active voice"
            },
            Self::Chaotic => {
                "Chaotic: Unhinged but functional, random EMPHASIS!!!, internet slang mixed with corporate speak, emojis"
            },
        }
    }

    /// All tones in declaration order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Professional, Self::Friendly, Self::Firm, Self::Chaotic]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "friendly" => Ok(Self::Friendly),
            "firm" => Ok(Self::Firm),
            "chaotic" => Ok(Self::Chaotic),
            other => Err(DomainError::InvalidTone(other.to_string())),
        }
    }
}
