//! Port definitions for draft generation
//!
//! Any implementation may support zero, one, or many interchangeable
//! providers behind this contract; each must produce a full
//! [`VariationSet`] or fail with one of the [`GenerationError`] kinds.

use async_trait::async_trait;
use domain::{EmailRequest, VariationSet};

use crate::error::GenerationError;

/// Port for email draft generators
///
/// Implementations are stateless with respect to requests: each call is
/// a pure function of its input plus the configuration captured at
/// construction, so concurrent calls on one instance are safe. No
/// internal retry, streaming, or cancellation is offered; retry policy
/// belongs to callers.
#[async_trait]
pub trait DraftGenerator: Send + Sync {
    /// Generate exactly three email variations for the request
    ///
    /// Fails fast with `InvalidInput` before any network call when the
    /// request context is below the minimum length.
    async fn generate(&self, request: &EmailRequest) -> Result<VariationSet, GenerationError>;

    /// Short provider identifier for logs and output
    fn provider(&self) -> &'static str;
}
