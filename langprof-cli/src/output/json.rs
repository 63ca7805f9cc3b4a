//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// Input the sentence came from
    pub source: String,
    /// The sentence text, including trailing whitespace
    pub text: String,
    /// Starting byte offset in the input
    pub offset: usize,
    /// Length in bytes
    pub length: usize,
    /// Length in characters
    pub chars: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, source: &str, sentence: &str, offset: usize) -> Result<()> {
        self.sentences.push(SentenceData {
            source: source.to_string(),
            text: sentence.to_string(),
            offset,
            length: sentence.len(),
            chars: sentence.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
