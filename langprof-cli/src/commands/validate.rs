//! Validate command implementation

use anyhow::Result;
use clap::Args;
use langprof_core::load_profile_file;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language profile file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language profile: {}",
            self.language_config.display()
        );

        match load_profile_file(&self.language_config) {
            Ok(profile) => {
                println!("✓ Profile is valid!");
                println!("  Language code: {}", profile.code());
                println!("  Language name: {}", profile.name());
                println!(
                    "  Sentence end: {}",
                    profile.sentence_end().iter().collect::<String>()
                );
                println!("  Punctuation rules: {}", profile.punctuation().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
