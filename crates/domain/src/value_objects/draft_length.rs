//! Draft length value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Requested length band for the generated drafts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DraftLength {
    /// 3-5 sentences, 50-100 words
    Short,
    /// 2-3 paragraphs, 100-200 words
    #[default]
    Medium,
    /// 3-5 paragraphs, 200-350 words
    Long,
}

impl DraftLength {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Word-band guideline injected into the system prompt
    #[must_use]
    pub const fn guideline(&self) -> &'static str {
        match self {
            Self::Short => "Short: 3-5 sentences, 50-100 words max",
            Self::Medium => "Medium: 2-3 paragraphs, 100-200 words",
            Self::Long => "Long: 3-5 paragraphs, 200-350 words, use bullet points if listing items",
        }
    }

    /// All lengths in ascending order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Short, Self::Medium, Self::Long]
    }
}

impl fmt::Display for DraftLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DraftLength {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(DomainError::InvalidLength(other.to_string())),
        }
    }
}
