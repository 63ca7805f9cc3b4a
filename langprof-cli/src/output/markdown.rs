//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs sentences as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
    current_source: Option<String>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
            current_source: None,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, source: &str, sentence: &str, _offset: usize) -> Result<()> {
        if self.current_source.as_deref() != Some(source) {
            if self.current_source.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
            self.current_source = Some(source.to_string());
        }

        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", self.sentence_count, sentence.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_list() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_sentence("a.txt", "你好。", 0).unwrap();
            formatter.format_sentence("a.txt", "再见！", 9).unwrap();
            formatter.format_sentence("b.txt", "谢谢", 0).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("## a.txt\n\n1. 你好。\n2. 再见！\n"));
        assert!(output.contains("\n## b.txt\n\n3. 谢谢\n"));
        assert!(output.ends_with("*Total sentences: 3*\n"));
    }
}
