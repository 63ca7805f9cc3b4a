//! Configuration structures and validation
//!
//! This module defines the TOML schema for language profiles. Every section
//! except `[metadata]` is optional; a missing section inherits from the base
//! profile the configuration is built on.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ProfileError, Result};
use crate::profile::{LengthRule, PunctuationEntry, TrailingSpace};

/// Root profile configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_separator: Option<String>,
    /// Characters stripped from words and skipped when counting characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punctuation_chars: Option<String>,
    /// Names of generic checks that do not apply to this language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignored_tests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Sentences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<LengthRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punctuation: Option<Vec<PunctuationEntry>>,
}

/// Profile metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Sentence boundary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentences {
    pub terminators: Vec<char>,
    #[serde(default)]
    pub trailing_space: TrailingSpace,
    /// Reject a boundary when the next sentence starts lowercase or with a digit
    #[serde(default = "default_true")]
    pub capital_start: bool,
}

fn default_true() -> bool {
    true
}

impl ProfileConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(ProfileError::InvalidConfig(
                "Language code must not be empty".to_string(),
            ));
        }

        if let Some(sentences) = &self.sentences {
            if sentences.terminators.is_empty() {
                return Err(ProfileError::InvalidConfig(
                    "No terminator characters defined".to_string(),
                ));
            }
        }

        if let Some(length) = &self.length {
            length.validate()?;
        }

        Ok(())
    }
}
