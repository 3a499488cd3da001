//! Validated container for one generation's drafts

use serde::{Deserialize, Serialize};

use crate::{entities::EmailVariation, errors::DomainError};

/// Every generation returns exactly this many variations
pub const VARIATION_COUNT: usize = 3;

/// An ordered set of exactly [`VARIATION_COUNT`] validated variations
///
/// There is no partial-success mode: either all three entries are
/// well-formed or construction fails as a unit. Entries keep the
/// model-returned order; position conveys no tone ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EmailVariation>")]
pub struct VariationSet(Vec<EmailVariation>);

impl TryFrom<Vec<EmailVariation>> for VariationSet {
    type Error = DomainError;

    fn try_from(variations: Vec<EmailVariation>) -> Result<Self, Self::Error> {
        Self::new(variations)
    }
}

impl VariationSet {
    /// Validate and normalize raw variations into a set
    ///
    /// Checks cardinality and per-entry completeness, then overwrites
    /// each `id` with its 1-based position so identifiers are stable
    /// and collision-free regardless of what the model returned.
    pub fn new(mut variations: Vec<EmailVariation>) -> Result<Self, DomainError> {
        if variations.len() != VARIATION_COUNT {
            return Err(DomainError::WrongVariationCount {
                expected: VARIATION_COUNT,
                actual: variations.len(),
            });
        }

        for (index, variation) in variations.iter().enumerate() {
            if let Some(field) = variation.missing_field() {
                return Err(DomainError::incomplete(index + 1, field));
            }
        }

        for (index, variation) in variations.iter_mut().enumerate() {
            variation.id = u8::try_from(index + 1).unwrap_or(u8::MAX);
        }

        Ok(Self(variations))
    }

    /// The variations in model-returned order
    #[must_use]
    pub fn variations(&self) -> &[EmailVariation] {
        &self.0
    }

    /// Look up a variation by its 1-based id
    #[must_use]
    pub fn get(&self, id: u8) -> Option<&EmailVariation> {
        self.0.iter().find(|v| v.id == id)
    }

    /// Consume the set, yielding the inner variations
    #[must_use]
    pub fn into_inner(self) -> Vec<EmailVariation> {
        self.0
    }

    /// Always [`VARIATION_COUNT`]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a VariationSet {
    type Item = &'a EmailVariation;
    type IntoIter = std::slice::Iter<'a, EmailVariation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
