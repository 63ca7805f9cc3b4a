//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

/// Where a text to process comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Label used in output and log messages
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

/// Resolve command-line inputs in the order given; no patterns, or `-`,
/// means stdin
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    if patterns.is_empty() {
        return Ok(vec![InputSource::Stdin]);
    }

    let mut inputs = Vec::new();
    for pattern in patterns {
        if pattern == "-" {
            if !inputs.contains(&InputSource::Stdin) {
                inputs.push(InputSource::Stdin);
            }
            continue;
        }

        for path in resolve_patterns(std::slice::from_ref(pattern))? {
            let input = InputSource::File(path);
            if !inputs.contains(&input) {
                inputs.push(input);
            }
        }
    }

    Ok(inputs)
}
