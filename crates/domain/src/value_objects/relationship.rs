//! Addressee relationship value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Who the email is addressed to, relative to the sender
///
/// Drives the formality rules in the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Colleague,
    Manager,
    Client,
    Friend,
    Boss,
    Vendor,
    Stranger,
}

impl Relationship {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Colleague => "colleague",
            Self::Manager => "manager",
            Self::Client => "client",
            Self::Friend => "friend",
            Self::Boss => "boss",
            Self::Vendor => "vendor",
            Self::Stranger => "stranger",
        }
    }

    /// Formality rule injected into the system prompt
    #[must_use]
    pub const fn formality_rule(&self) -> &'static str {
        match self {
            Self::Boss => "Boss: Most formal, respectful, \"I appreciate your consideration\"",
            Self::Manager => "Manager: Formal but familiar, status updates framed constructively",
            Self::Colleague => "Colleague: Collaborative, \"Let's\" and \"we\" language",
            Self::Client => "Client: Professional with warmth, customer-service oriented",
            Self::Vendor => "Vendor: Business-focused, clear expectations",
            Self::Friend => "Friend: Most casual, personal touches OK",
            Self::Stranger => "Stranger: Polite and professional, brief self-intro",
        }
    }

    /// All relationships in declaration order
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Colleague,
            Self::Manager,
            Self::Client,
            Self::Friend,
            Self::Boss,
            Self::Vendor,
            Self::Stranger,
        ]
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Relationship {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "colleague" => Ok(Self::Colleague),
            "manager" => Ok(Self::Manager),
            "client" => Ok(Self::Client),
            "friend" => Ok(Self::Friend),
            "boss" => Ok(Self::Boss),
            "vendor" => Ok(Self::Vendor),
            "stranger" => Ok(Self::Stranger),
            other => Err(DomainError::InvalidRelationship(other.to_string())),
        }
    }
}
