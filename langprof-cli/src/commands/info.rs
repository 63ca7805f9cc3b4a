//! Info command implementation

use anyhow::Result;
use clap::Args;
use langprof_core::LanguageProfile;
use serde::Serialize;
use std::io::{self, Write};

use super::ProfileArgs;

/// Arguments for the info command
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Serializable view of a profile
#[derive(Debug, Serialize)]
pub struct ProfileInfo {
    pub code: String,
    pub name: String,
    pub list_separator: String,
    pub sentence_end: String,
    pub sentence_pattern: String,
    pub punctuation: Vec<(String, String)>,
    pub length_offset: i64,
    pub length_divisor: Option<i64>,
    pub ignored_tests: Vec<String>,
}

impl From<&LanguageProfile> for ProfileInfo {
    fn from(profile: &LanguageProfile) -> Self {
        let length = profile.length_rule();
        Self {
            code: profile.code().to_string(),
            name: profile.name().to_string(),
            list_separator: profile.list_separator().to_string(),
            sentence_end: profile.sentence_end().iter().collect(),
            sentence_pattern: profile.sentence_boundary().pattern().as_str().to_string(),
            punctuation: profile
                .punctuation()
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            length_offset: length.offset,
            length_divisor: length.divisor,
            ignored_tests: profile.ignored_tests().iter().cloned().collect(),
        }
    }
}

impl InfoArgs {
    /// Execute the info command
    pub fn execute(&self) -> Result<()> {
        let config = self.profile.cli_config()?;
        let profile = self.profile.source(&config).load()?;
        let info = ProfileInfo::from(profile.as_ref());

        let mut stdout = io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut stdout, &info)?;
            writeln!(stdout)?;
        } else {
            write_text(&mut stdout, &info)?;
        }
        stdout.flush()?;
        Ok(())
    }
}

fn write_text<W: Write>(writer: &mut W, info: &ProfileInfo) -> Result<()> {
    writeln!(writer, "Language:        {} ({})", info.name, info.code)?;
    writeln!(writer, "List separator:  {:?}", info.list_separator)?;
    writeln!(writer, "Sentence end:    {}", info.sentence_end)?;
    writeln!(writer, "Boundary:        {}", info.sentence_pattern)?;
    match info.length_divisor {
        Some(divisor) => writeln!(
            writer,
            "Length rule:     {} - length / {}",
            info.length_offset, divisor
        )?,
        None => writeln!(writer, "Length rule:     {}", info.length_offset)?,
    }
    if info.ignored_tests.is_empty() {
        writeln!(writer, "Ignored tests:   (none)")?;
    } else {
        writeln!(writer, "Ignored tests:   {}", info.ignored_tests.join(", "))?;
    }
    writeln!(writer, "Punctuation:     {} rule(s)", info.punctuation.len())?;
    for (from, to) in &info.punctuation {
        writeln!(writer, "  {from:?} -> {to:?}")?;
    }
    Ok(())
}
