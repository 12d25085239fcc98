use async_trait::async_trait;

use crate::core::types::{Correction, Language};
use crate::error::CorrectionError;

/// Capability seam for the remote correction service.
///
/// The production implementation talks to a generative-text API over the
/// network; tests substitute fakes to drive every failure path without
/// touching a socket. Implementations perform exactly one outbound call per
/// invocation — no retries, no caching.
#[async_trait]
pub trait CorrectionBackend: Send + Sync {
    /// Ask the backend to repair `source` given the diagnostic it produced.
    async fn correct(
        &self,
        language: Language,
        source: &str,
        error_message: &str,
    ) -> Result<Correction, CorrectionError>;
}
