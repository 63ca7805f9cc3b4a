//! Language profiles
//!
//! A [`LanguageProfile`] bundles the locale-specific rules generic
//! translation tooling consults: where sentences end, how punctuation is
//! written, how long a translation is expected to be, and which generic
//! checks do not apply. Profiles are built from a [`ProfileConfig`] layered
//! over a base profile, so a language only states what differs from the
//! common defaults.

pub mod boundary;
pub mod length;
pub mod punctuation;

pub use boundary::{BoundaryMatcher, Sentences, TrailingSpace};
pub use length::LengthRule;
pub use punctuation::{PunctuationEntry, PunctuationTable};

use std::collections::BTreeSet;
use std::path::Path;

use crate::config::ProfileConfig;
use crate::error::{ProfileError, Result};

/// Immutable set of linguistic rules for one language
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    code: String,
    name: String,
    list_separator: String,
    punctuation_chars: Vec<char>,
    boundary: BoundaryMatcher,
    punctuation: PunctuationTable,
    length_difference: LengthRule,
    ignored_tests: BTreeSet<String>,
}

impl LanguageProfile {
    /// Build a profile from configuration
    ///
    /// Sections missing from `config` are taken from `base`. Without a base,
    /// `[sentences]` is required and everything else falls back to empty
    /// defaults.
    pub fn from_config(config: &ProfileConfig, base: Option<&LanguageProfile>) -> Result<Self> {
        config.validate()?;

        let boundary = match (&config.sentences, base) {
            (Some(sentences), _) => BoundaryMatcher::new(
                &sentences.terminators,
                sentences.trailing_space,
                sentences.capital_start,
            )?,
            (None, Some(base)) => base.boundary.clone(),
            (None, None) => {
                return Err(ProfileError::InvalidConfig(format!(
                    "Profile '{}' has no [sentences] section and no base profile",
                    config.metadata.code
                )))
            }
        };

        let punctuation = match (&config.punctuation, base) {
            (Some(entries), _) => PunctuationTable::new(entries.clone())?,
            (None, Some(base)) => base.punctuation.clone(),
            (None, None) => PunctuationTable::default(),
        };

        let list_separator = config
            .list_separator
            .clone()
            .or_else(|| base.map(|b| b.list_separator.clone()))
            .unwrap_or_else(|| ", ".to_string());

        let punctuation_chars = match (&config.punctuation_chars, base) {
            (Some(chars), _) => chars.chars().collect(),
            (None, Some(base)) => base.punctuation_chars.clone(),
            (None, None) => Vec::new(),
        };

        let length_difference = config
            .length
            .or_else(|| base.map(|b| b.length_difference))
            .unwrap_or_default();

        let ignored_tests = match (&config.ignored_tests, base) {
            (Some(tests), _) => tests.iter().cloned().collect(),
            (None, Some(base)) => base.ignored_tests.clone(),
            (None, None) => BTreeSet::new(),
        };

        log::debug!(
            "Built language profile '{}' ({}) with {} punctuation rules",
            config.metadata.code,
            config.metadata.name,
            punctuation.len()
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            list_separator,
            punctuation_chars,
            boundary,
            punctuation,
            length_difference,
            ignored_tests,
        })
    }

    /// Load a profile from a TOML file
    pub fn from_file(path: &Path, base: Option<&LanguageProfile>) -> Result<Self> {
        let config = ProfileConfig::from_file(path)?;
        Self::from_config(&config, base)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Separator used when joining list items
    pub fn list_separator(&self) -> &str {
        &self.list_separator
    }

    /// Characters that end a sentence
    pub fn sentence_end(&self) -> &[char] {
        self.boundary.terminators()
    }

    pub fn sentence_boundary(&self) -> &BoundaryMatcher {
        &self.boundary
    }

    pub fn punctuation(&self) -> &PunctuationTable {
        &self.punctuation
    }

    pub fn punctuation_chars(&self) -> &[char] {
        &self.punctuation_chars
    }

    pub fn length_rule(&self) -> LengthRule {
        self.length_difference
    }

    /// Expected length difference of a translation for a source of
    /// `source_len` characters
    pub fn length_difference(&self, source_len: usize) -> i64 {
        self.length_difference.difference(source_len)
    }

    /// Generic checks to skip for this language
    pub fn ignored_tests(&self) -> &BTreeSet<String> {
        &self.ignored_tests
    }

    pub fn ignores_test(&self, test_name: &str) -> bool {
        self.ignored_tests.contains(test_name)
    }

    /// Split text into sentences, keeping every character
    ///
    /// Each sentence carries its terminator and the whitespace after it.
    pub fn sentences<'p, 't>(&'p self, text: &'t str) -> Sentences<'p, 't> {
        self.boundary.sentences(text)
    }

    /// Split text into sentences with surrounding whitespace removed,
    /// dropping empty ones
    pub fn sentences_trimmed<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.sentences(text)
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
    }

    /// Convert Western punctuation in `text` to this language's conventions
    pub fn translate_punctuation(&self, text: &str) -> String {
        self.punctuation.translate(text)
    }

    #[inline]
    pub fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation_chars.contains(&ch)
    }

    /// Characters that are neither whitespace nor punctuation
    pub fn characters<'a>(&'a self, text: &'a str) -> impl Iterator<Item = char> + 'a {
        text.chars()
            .filter(move |&ch| !ch.is_whitespace() && !self.is_punctuation(ch))
    }

    /// Whitespace-separated words with surrounding punctuation removed
    pub fn words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split_whitespace()
            .map(move |word| word.trim_matches(|ch| self.is_punctuation(ch)))
            .filter(|word| !word.is_empty())
    }

    /// Whether the text starts with an uppercase letter, ignoring leading
    /// whitespace and punctuation
    pub fn starts_with_capital(&self, text: &str) -> bool {
        text.trim_start()
            .trim_start_matches(|ch| self.is_punctuation(ch))
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
    }
}
