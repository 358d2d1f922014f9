//! Capabilities applied by the resolver stage: text normalization and solving.

use crate::error::Result;
use crate::types::Answer;
use async_trait::async_trait;

/// Text-to-text transform applied before solving. Must be idempotent: `normalize(normalize(x)) == normalize(x)`.
#[async_trait]
pub trait Normalizer: Send + Sync {
    async fn normalize(&self, text: &str) -> Result<String>;
}

/// Attempts to resolve normalized text into an [`Answer`]. `Ok(None)` means "no answer".
///
/// One solver is shared across all updates, possibly from concurrent tasks.
#[async_trait]
pub trait Solver: Send + Sync {
    async fn solve(&self, text: &str) -> Result<Option<Answer>>;
}

/// Normalizer that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

#[async_trait]
impl Normalizer for IdentityNormalizer {
    async fn normalize(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
