//! List command implementation

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use langprof_core::{available_languages, get_profile};

use crate::output::OutputFormat;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available language profiles
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        for line in self.lines()? {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>> {
        match self {
            ListCommands::Languages => available_languages()
                .into_iter()
                .map(|code| -> Result<String> {
                    let profile = get_profile(code)?;
                    Ok(format!("{:<8} {}", profile.code(), profile.name()))
                })
                .collect(),
            ListCommands::Formats => Ok(OutputFormat::value_variants()
                .iter()
                .map(|format| format.as_str().to_string())
                .collect()),
        }
    }
}
