use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseLanguageError;

/// Languages the playground recognizes.
///
/// The set is closed: evaluation behavior, sample snippets and editor
/// placeholders are all keyed off this enum, and nothing else is accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum Language {
    JavaScript,
    Python,
    Java,
    Html,
    Css,
    C,
    Cpp,
    R,
}

impl Language {
    /// Every supported language, in the order the picker presents them.
    pub const ALL: [Language; 8] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Html,
        Language::Css,
        Language::C,
        Language::Cpp,
        Language::R,
    ];

    /// Lowercase identifier used in tags, prompts and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Html => "html",
            Language::Css => "css",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::R => "r",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == tag)
            .ok_or_else(|| ParseLanguageError {
                tag: tag.to_string(),
            })
    }
}

/// Outcome of a simulated run: either program output or a diagnostic message.
///
/// Produced fresh on every run; `message` is always non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum DiagnosticResult {
    Success(String),
    Error(String),
}

impl DiagnosticResult {
    pub fn success(message: impl Into<String>) -> Self {
        DiagnosticResult::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        DiagnosticResult::Error(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            DiagnosticResult::Success(message) | DiagnosticResult::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DiagnosticResult::Error(_))
    }
}

/// A proposed fix from the correction service.
///
/// Field names follow the wire schema the service is asked to produce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    pub corrected_code: String,
    pub explanation: String,
}
