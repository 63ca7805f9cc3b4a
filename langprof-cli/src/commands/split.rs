//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::ProfileArgs;
use crate::input::resolve_inputs;
use crate::output::OutputFormat;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Strip whitespace around each sentence and drop empty ones
    #[arg(long)]
    pub trim: bool,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        let config = self.profile.cli_config()?;
        let profile = self.profile.source(&config).load()?;
        let inputs = resolve_inputs(&self.input)?;
        let format = self.format.unwrap_or(config.output.default_format);
        let trim = self.trim || config.profile.trim_sentences;

        log::info!(
            "Splitting {} input(s) with profile '{}' as {}",
            inputs.len(),
            profile.code(),
            format.as_str()
        );

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);

        for input in &inputs {
            let name = input.name();
            let text = input.read_text()?;
            let mut count = 0;
            let mut offset = 0;

            for sentence in profile.sentences(&text) {
                if trim {
                    let trimmed = sentence.trim();
                    if !trimmed.is_empty() {
                        let leading = sentence.len() - sentence.trim_start().len();
                        formatter.format_sentence(&name, trimmed, offset + leading)?;
                        count += 1;
                    }
                } else {
                    formatter.format_sentence(&name, sentence, offset)?;
                    count += 1;
                }
                offset += sentence.len();
            }

            log::debug!("{name}: {count} sentence(s)");
        }

        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: PathBuf, output: PathBuf, format: OutputFormat, trim: bool) -> SplitArgs {
        SplitArgs {
            input: vec![input.to_str().unwrap().to_string()],
            output: Some(output),
            format: Some(format),
            trim,
            profile: ProfileArgs {
                language: Some("zh".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_split_to_text_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "今天天气很好。你好！再见").unwrap();

        args(input, output.clone(), OutputFormat::Text, false)
            .execute()
            .unwrap();

        let content = fs::read_to_string(output).unwrap();
        assert_eq!(content, "今天天气很好。\n你好！\n再见\n");
    }

    #[test]
    fn test_split_json_offsets_with_trim() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.json");
        fs::write(&input, "你好。 \n  再见！").unwrap();

        args(input, output.clone(), OutputFormat::Json, true)
            .execute()
            .unwrap();

        let content = fs::read_to_string(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let sentences = parsed.as_array().unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0]["text"], "你好。");
        assert_eq!(sentences[0]["offset"], 0);
        assert_eq!(sentences[1]["text"], "再见！");
        // "你好。 \n  " is 13 bytes
        assert_eq!(sentences[1]["offset"], 13);
    }

    #[test]
    fn test_split_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let result = args(
            temp_dir.path().join("missing.txt"),
            temp_dir.path().join("out.txt"),
            OutputFormat::Text,
            false,
        )
        .execute();
        assert!(result.is_err());
    }
}
