//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new profile
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language profile template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file; remove any section to inherit the common rules");
        println!("2. Validate your profile:");
        println!(
            "   langprof validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it:");
        println!(
            "   langprof split -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template profile content
    fn generate_template(&self) -> String {
        // quoted and escaped as a TOML string
        let code = toml::Value::String(self.language_code.clone()).to_string();
        format!(
            r#"# Language profile template
#
# Every section except [metadata] is optional. Anything left out is taken
# from the common profile.

# Glyph used to join list items
list_separator = ", "

# Generic checks that do not apply to this language
ignored_tests = []

[metadata]
code = {code}
name = "Custom Language"

[sentences]
# Characters that end a sentence
terminators = [".", "!", "?"]
# "required": whitespace must follow a terminator; "optional": it may
trailing_space = "required"
# Only split when the next sentence does not start lowercase or with a digit
capital_start = true

# Expected length difference of a translation: offset - source_length / divisor
[length]
offset = 0
# divisor = 2

# Punctuation substitutions, applied longest key first
[[punctuation]]
from = ". "
to = ". "

# [[punctuation]]
# from = "? "
# to = "？"
"#
        )
    }
}
