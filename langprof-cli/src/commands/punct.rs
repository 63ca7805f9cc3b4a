//! Punct command implementation

use anyhow::{Context, Result};
use clap::Args;
use langprof_core::LanguageProfile;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use super::ProfileArgs;
use crate::input::resolve_inputs;

/// Arguments for the punct command
#[derive(Debug, Args)]
pub struct PunctArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Treat every line as a separate message
    #[arg(long)]
    pub lines: bool,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

impl PunctArgs {
    /// Execute the punct command
    pub fn execute(&self) -> Result<()> {
        let config = self.profile.cli_config()?;
        let profile = self.profile.source(&config).load()?;

        if profile.punctuation().is_empty() {
            log::warn!(
                "Profile '{}' has no punctuation rules; text is passed through unchanged",
                profile.code()
            );
        }

        let mut converted = String::new();
        for input in resolve_inputs(&self.input)? {
            let text = input.read_text()?;
            converted.push_str(&self.convert(&profile, &text));
        }

        match &self.output {
            Some(path) => fs::write(path, converted)
                .with_context(|| format!("Failed to write to {}", path.display()))?,
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(converted.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }

    fn convert(&self, profile: &LanguageProfile, text: &str) -> String {
        if !self.lines {
            return profile.translate_punctuation(text);
        }

        text.split_inclusive('\n')
            .map(|line| match line.strip_suffix('\n') {
                Some(message) => format!("{}\n", profile.translate_punctuation(message)),
                None => profile.translate_punctuation(line),
            })
            .collect()
    }
}
