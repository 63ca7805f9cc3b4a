//! Language profile source management for CLI

use anyhow::{Context, Result};
use langprof_core::{get_profile, load_profile_file, LanguageProfile};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::CliError;

/// Source of language rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Built-in profile looked up by locale code
    BuiltIn(String),
    /// External TOML profile layered over the common profile
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl ProfileSource {
    /// Get the display name for the profile source
    pub fn display_name(&self) -> String {
        match self {
            ProfileSource::BuiltIn(code) => format!("Built-in: {code}"),
            ProfileSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the profile
    pub fn load(&self) -> Result<Arc<LanguageProfile>> {
        log::info!("Loading language profile ({})", self.display_name());

        match self {
            ProfileSource::BuiltIn(code) => {
                get_profile(code).map_err(|e| CliError::ProfileError(e.to_string()).into())
            }
            ProfileSource::External { path } => {
                let profile = load_profile_file(path).with_context(|| {
                    format!("Failed to load language config: {}", path.display())
                })?;
                Ok(Arc::new(profile))
            }
        }
    }
}
