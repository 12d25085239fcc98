//! Domain-specific error types for snippetlab using thiserror
//!
//! The diagnostic engine and the correction requester both expose total
//! surfaces, so these types never cross those public boundaries. They exist
//! for the fallible interior (config loading, the raw backend call, language
//! tag parsing) and for tests that inject specific failures.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the raw correction backend call.
///
/// Every variant is absorbed by the requester layer and degraded to the
/// placeholder correction; none of them reach the caller.
#[derive(Error, Debug)]
pub enum CorrectionError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("request to correction service failed")]
    Transport(#[from] reqwest::Error),

    #[error("correction service returned HTTP status {0}")]
    Status(u16),

    #[error("correction service returned no candidates")]
    EmptyResponse,

    #[error("malformed correction payload")]
    Payload(#[from] serde_json::Error),
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Returned when a language tag does not name a supported language.
///
/// The display form doubles as the diagnostic message the engine reports for
/// unknown tags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Language {tag} not supported.")]
pub struct ParseLanguageError {
    pub tag: String,
}
