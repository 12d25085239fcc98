//! Configuration for the correction service client.
//!
//! Settings load from an optional TOML file in the platform config directory
//! and fall back to defaults matching the hosted playground. The API
//! credential is deliberately NOT part of this struct: it is resolved from
//! the process environment at call time, so a missing key surfaces as an
//! ordinary request failure instead of a startup error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const CONFIG_FILE_NAME: &str = "snippetlab.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Model identifier passed to the generateContent endpoint.
    pub model: String,
    /// Base URL of the generative-text service.
    pub endpoint: String,
    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CorrectionConfig {
    /// Parse a config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Platform config file location, e.g.
    /// `~/.config/snippetlab/snippetlab.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snippetlab").join(CONFIG_FILE_NAME))
    }

    /// Load the user's config file if one exists, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    "failed to load config from {}: {err}, using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }
}
