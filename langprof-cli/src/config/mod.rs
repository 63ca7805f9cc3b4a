//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Profile selection defaults
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Profile-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Locale code used when `--language` is not given
    pub default_language: String,

    /// Strip whitespace around sentences
    pub trim_sentences: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default_language: "zh".to_string(),
            trim_sentences: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("Loaded CLI configuration from {}", path.display());
        Ok(config)
    }
}
