//! Gemini `generateContent` backend.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::CorrectionConfig;
use crate::core::traits::CorrectionBackend;
use crate::core::types::{Correction, Language};
use crate::error::CorrectionError;

/// Environment variables consulted for the service credential, in order.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Production [`CorrectionBackend`] that asks Gemini for a corrected snippet
/// as a strict two-field JSON object.
pub struct GeminiBackend {
    config: CorrectionConfig,
    client: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(config: CorrectionConfig) -> Result<Self, CorrectionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Resolve the credential from the environment at call time.
    fn api_key() -> Result<String, CorrectionError> {
        API_KEY_VARS
            .iter()
            .find_map(|var| env::var(var).ok().filter(|value| !value.is_empty()))
            .ok_or(CorrectionError::MissingApiKey)
    }

    fn prompt(language: Language, source: &str, error_message: &str) -> String {
        format!(
            "You are an expert programmer and code debugger.\n\
             A user has provided a piece of {language} code that resulted in an error.\n\
             Your task is to fix the code and provide a brief, clear explanation of the error and your correction.\n\
             \n\
             Original Code:\n\
             ```{language}\n\
             {source}\n\
             ```\n\
             \n\
             Error Message:\n\
             ```\n\
             {error_message}\n\
             ```\n\
             \n\
             Please provide your response in the specified JSON format."
        )
    }

    fn request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "correctedCode": {
                            "type": "STRING",
                            "description": "The corrected, fully functional code snippet."
                        },
                        "explanation": {
                            "type": "STRING",
                            "description": "A brief explanation of the error and the fix applied."
                        }
                    },
                    "required": ["correctedCode", "explanation"]
                }
            }
        })
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl CorrectionBackend for GeminiBackend {
    async fn correct(
        &self,
        language: Language,
        source: &str,
        error_message: &str,
    ) -> Result<Correction, CorrectionError> {
        let key = Self::api_key()?;
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        let prompt = Self::prompt(language, source, error_message);

        tracing::debug!(%language, model = %self.config.model, "requesting correction");
        let response = self
            .client
            .post(&url)
            .query(&[("key", key.as_str())])
            .json(&Self::request_body(&prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorrectionError::Status(status.as_u16()));
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(CorrectionError::EmptyResponse)?;

        let correction: Correction = serde_json::from_str(text.trim())?;
        Ok(correction)
    }
}
