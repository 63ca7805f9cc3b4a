//! Profile error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or looking up language profiles
///
/// A profile that has been built never fails; every variant here comes from
/// construction (configuration, pattern compilation) or registry lookup.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// No profile is registered for the code
    #[error("language '{code}' not supported")]
    UnknownLanguage {
        /// The language code that was requested
        code: String,
    },

    /// Configuration is structurally valid TOML but semantically wrong
    #[error("invalid profile configuration: {0}")]
    InvalidConfig(String),

    /// The derived sentence boundary pattern failed to compile
    #[error("invalid sentence boundary pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// TOML parse error
    #[error("failed to parse profile configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Profile file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;
