//! Correction requester: one request out, a [`Correction`] back, always.
//!
//! The requester wraps a [`CorrectionBackend`] and absorbs every failure the
//! backend can produce — missing credential, transport error, bad status,
//! empty candidates, malformed payload — into a fixed placeholder correction.
//! Nothing crosses this boundary as an error.

mod gemini;

pub use gemini::GeminiBackend;

use std::sync::Arc;

use crate::config::CorrectionConfig;
use crate::core::traits::CorrectionBackend;
use crate::core::types::{Correction, Language};
use crate::error::CorrectionError;

/// Placeholder code returned when the backend call fails.
pub const FALLBACK_CORRECTED_CODE: &str = "// AI could not process the code.";
/// Placeholder explanation returned when the backend call fails.
pub const FALLBACK_EXPLANATION: &str =
    "There was an issue with the AI correction service. Please try again later.";

/// Total wrapper around a [`CorrectionBackend`].
#[derive(Clone)]
pub struct CorrectionRequester {
    backend: Arc<dyn CorrectionBackend>,
}

impl CorrectionRequester {
    pub fn new(backend: Arc<dyn CorrectionBackend>) -> Self {
        Self { backend }
    }

    /// Build a requester over the production Gemini backend.
    pub fn gemini(config: CorrectionConfig) -> Result<Self, CorrectionError> {
        Ok(Self::new(Arc::new(GeminiBackend::new(config)?)))
    }

    /// Ask for a corrected snippet. Resolves to the placeholder correction on
    /// any failure; never returns an error.
    pub async fn request(
        &self,
        language: Language,
        source: &str,
        error_message: &str,
    ) -> Correction {
        match self.backend.correct(language, source, error_message).await {
            Ok(correction) => correction,
            Err(err) => {
                tracing::error!("correction request failed: {err}");
                placeholder()
            }
        }
    }
}

/// The fixed correction handed back when the request path fails.
pub fn placeholder() -> Correction {
    Correction {
        corrected_code: FALLBACK_CORRECTED_CODE.to_string(),
        explanation: FALLBACK_EXPLANATION.to_string(),
    }
}
