//! Playground session orchestration.
//!
//! A [`PlaygroundSession`] owns the transient state of one editing session:
//! the selected language, the editor source, the last run's result and any
//! pending correction. Nothing here persists across sessions.
//!
//! Each run gets a fresh id, and a correction is only stored if the run that
//! triggered it is still the current one — a superseded in-flight request's
//! result is discarded at the application boundary rather than by cancelling
//! the transport.

use uuid::Uuid;

use crate::core::samples::sample_code;
use crate::core::types::{Correction, DiagnosticResult, Language};
use crate::correction::CorrectionRequester;
use crate::engine;

/// Placeholder code when the requester task itself cannot be awaited.
pub const UNAVAILABLE_CORRECTED_CODE: &str = "Error: AI correction service is unavailable.";
/// Placeholder explanation when the requester task itself cannot be awaited.
pub const UNAVAILABLE_EXPLANATION: &str =
    "Could not connect to the AI service. Please check your connection and API key.";

pub struct PlaygroundSession {
    language: Language,
    source: String,
    last_result: Option<DiagnosticResult>,
    last_correction: Option<Correction>,
    current_run: Option<Uuid>,
    requester: CorrectionRequester,
}

impl PlaygroundSession {
    /// Start a session on `language`, editor preloaded with its sample.
    pub fn new(language: Language, requester: CorrectionRequester) -> Self {
        Self {
            language,
            source: sample_code(language).to_string(),
            last_result: None,
            last_correction: None,
            current_run: None,
            requester,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn last_result(&self) -> Option<&DiagnosticResult> {
        self.last_result.as_ref()
    }

    pub fn last_correction(&self) -> Option<&Correction> {
        self.last_correction.as_ref()
    }

    /// Switch languages: load that language's sample and clear any output
    /// from the previous one.
    pub fn select_language(&mut self, language: Language) {
        self.language = language;
        self.source = sample_code(language).to_string();
        self.last_result = None;
        self.last_correction = None;
        self.current_run = None;
    }

    /// Replace the editor contents.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Evaluate the current source. Each run supersedes the previous one; a
    /// correction still in flight for an earlier run will be discarded when
    /// it resolves.
    pub fn run(&mut self) -> DiagnosticResult {
        self.current_run = Some(Uuid::new_v4());
        self.last_correction = None;
        let result = engine::evaluate(&self.source, self.language);
        self.last_result = Some(result.clone());
        result
    }

    /// Request an AI correction for the last run, if it was an error.
    ///
    /// Returns `None` when there is nothing to correct (no run yet, or the
    /// last run succeeded) or when the resolving correction belongs to a
    /// superseded run. The requester itself never fails; if its task cannot
    /// even be awaited, the distinct "service unavailable" placeholder is
    /// substituted here.
    pub async fn request_correction(&mut self) -> Option<Correction> {
        let run_id = self.current_run?;
        let message = match self.last_result.as_ref()? {
            DiagnosticResult::Error(message) => message.clone(),
            DiagnosticResult::Success(_) => return None,
        };

        let requester = self.requester.clone();
        let language = self.language;
        let source = self.source.clone();
        let handle =
            tokio::spawn(async move { requester.request(language, &source, &message).await });

        let correction = match handle.await {
            Ok(correction) => correction,
            Err(err) => {
                tracing::error!("correction task failed to complete: {err}");
                Correction {
                    corrected_code: UNAVAILABLE_CORRECTED_CODE.to_string(),
                    explanation: UNAVAILABLE_EXPLANATION.to_string(),
                }
            }
        };

        self.accept_correction(run_id, correction)
    }

    /// Store `correction` only if `run_id` still names the active run.
    fn accept_correction(&mut self, run_id: Uuid, correction: Correction) -> Option<Correction> {
        if self.current_run != Some(run_id) {
            tracing::debug!(%run_id, "discarding correction for superseded run");
            return None;
        }
        self.last_correction = Some(correction.clone());
        Some(correction)
    }

    /// Accept the pending fix: the corrected code becomes the editor source,
    /// and both the last result and the correction are cleared.
    ///
    /// Returns `false` when no correction is pending.
    pub fn apply_correction(&mut self) -> bool {
        let Some(correction) = self.last_correction.take() else {
            return false;
        };
        self.source = correction.corrected_code;
        self.last_result = None;
        self.current_run = None;
        true
    }
}
