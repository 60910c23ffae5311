//! Service trait seams
//!
//! The outbound text-generation call sits behind a trait so handlers can
//! be exercised with a scripted stub in tests.

use async_trait::async_trait;

use crate::error::ExplainerResult;
use crate::types::Explanation;

/// Asks a text-generation service to phrase (never compute) the risk
/// explanation and confidence note for an already-computed recommendation.
#[async_trait]
pub trait ExplanationService: Send + Sync {
    async fn explain(&self, prompt: &str) -> ExplainerResult<Explanation>;
}
