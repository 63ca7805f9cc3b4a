//! Sentence boundary matching
//!
//! A boundary pattern is derived once from the terminator characters and the
//! spacing policy, then reused for every split. The pattern has the shape
//! `(?s).*?[terminators]\s*` (or `\s+`), so each match is the shortest run of
//! text, newlines included, that closes one sentence.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// Whitespace expected after a sentence terminator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSpace {
    /// At least one whitespace character must follow the terminator
    #[default]
    Required,
    /// Whitespace after the terminator is consumed when present
    Optional,
}

/// Compiled sentence boundary matcher
#[derive(Debug, Clone)]
pub struct BoundaryMatcher {
    terminators: Vec<char>,
    trailing_space: TrailingSpace,
    /// `(?s).*?[terminators]\s*` or `\s+`
    pattern: Regex,
    /// Present when the next sentence must not start lowercase or with a digit
    lowercase_start: Option<Regex>,
}

impl BoundaryMatcher {
    /// Derive the matcher from terminator characters
    pub fn new(
        terminators: &[char],
        trailing_space: TrailingSpace,
        capital_start: bool,
    ) -> Result<Self> {
        if terminators.is_empty() {
            return Err(ProfileError::InvalidConfig(
                "No terminator characters defined".to_string(),
            ));
        }

        let class: String = terminators
            .iter()
            .map(|ch| regex::escape(ch.encode_utf8(&mut [0u8; 4])))
            .collect();
        let spacing = match trailing_space {
            TrailingSpace::Required => r"\s+",
            TrailingSpace::Optional => r"\s*",
        };
        let pattern = Regex::new(&format!(r"(?s).*?[{class}]{spacing}"))?;

        let lowercase_start = if capital_start {
            Some(Regex::new(r"\A[a-z\d]")?)
        } else {
            None
        };

        Ok(Self {
            terminators: terminators.to_vec(),
            trailing_space,
            pattern,
            lowercase_start,
        })
    }

    /// Terminator characters, in configuration order
    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    /// Spacing policy after a terminator
    pub fn trailing_space(&self) -> TrailingSpace {
        self.trailing_space
    }

    /// Whether the following sentence must not start lowercase
    pub fn capital_start(&self) -> bool {
        self.lowercase_start.is_some()
    }

    /// The compiled boundary pattern
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// Split `text` into sentences
    pub fn sentences<'m, 't>(&'m self, text: &'t str) -> Sentences<'m, 't> {
        Sentences {
            matcher: self,
            text,
            pos: 0,
        }
    }

    /// Byte offset where the sentence starting at `start` ends, if a boundary
    /// exists before the end of the text
    fn next_end(&self, text: &str, start: usize) -> Option<usize> {
        let mut from = start;
        loop {
            let m = self.pattern.find_at(text, from)?;
            let Some(guard) = &self.lowercase_start else {
                return Some(m.end());
            };

            // Terminator ends where the trailing whitespace run begins
            let term_end = m.start() + text[m.start()..m.end()].trim_end().len();
            let rest = &text[m.end()..];
            if !rest.is_empty() && !guard.is_match(rest) {
                return Some(m.end());
            }

            // With two or more whitespace chars the boundary can give one back,
            // so the next sentence starts with whitespace instead of lowercase
            let mut spaces = text[term_end..m.end()].chars();
            if let (Some(last), Some(_)) = (spaces.next_back(), spaces.next()) {
                return Some(m.end() - last.len_utf8());
            }

            from = term_end;
        }
    }
}

/// Iterator over the sentences of a text
///
/// Sentences are slices of the input; concatenating them yields the input
/// unchanged. Text after the last boundary is yielded as a final,
/// unterminated sentence.
#[derive(Debug, Clone)]
pub struct Sentences<'m, 't> {
    matcher: &'m BoundaryMatcher,
    text: &'t str,
    pos: usize,
}

impl<'m, 't> Iterator for Sentences<'m, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        let end = self
            .matcher
            .next_end(self.text, start)
            .unwrap_or(self.text.len());
        self.pos = end;
        Some(&self.text[start..end])
    }
}

impl std::iter::FusedIterator for Sentences<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chinese() -> BoundaryMatcher {
        BoundaryMatcher::new(&['。', '！', '？', '…'], TrailingSpace::Optional, false).unwrap()
    }

    fn cased() -> BoundaryMatcher {
        BoundaryMatcher::new(&['.', '!', '?'], TrailingSpace::Required, true).unwrap()
    }

    #[test]
    fn test_pattern_shape() {
        assert_eq!(chinese().pattern().as_str(), r"(?s).*?[。！？…]\s*");
        assert_eq!(cased().pattern().as_str(), r"(?s).*?[\.!\?]\s+");
    }

    #[test]
    fn test_empty_terminators_rejected() {
        let result = BoundaryMatcher::new(&[], TrailingSpace::Optional, false);
        assert!(matches!(result, Err(ProfileError::InvalidConfig(_))));
    }

    #[test]
    fn test_optional_space_split() {
        let matcher = chinese();
        let sentences: Vec<_> = matcher.sentences("今天天气很好。你好！再见").collect();
        assert_eq!(sentences, vec!["今天天气很好。", "你好！", "再见"]);
    }

    #[test]
    fn test_trailing_whitespace_stays_with_sentence() {
        let matcher = chinese();
        let sentences: Vec<_> = matcher.sentences("第一句。  \n第二句？").collect();
        assert_eq!(sentences, vec!["第一句。  \n", "第二句？"]);
    }

    #[test]
    fn test_newlines_inside_sentence() {
        let matcher = chinese();
        let sentences: Vec<_> = matcher.sentences("第一\n行。第二").collect();
        assert_eq!(sentences, vec!["第一\n行。", "第二"]);
    }

    #[test]
    fn test_consecutive_terminators() {
        let matcher = chinese();
        let sentences: Vec<_> = matcher.sentences("真的吗？！").collect();
        assert_eq!(sentences, vec!["真的吗？", "！"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(chinese().sentences("").count(), 0);
    }

    #[test]
    fn test_required_space_and_capital() {
        let matcher = cased();
        let sentences: Vec<_> = matcher.sentences("Hello there. How are you?").collect();
        assert_eq!(sentences, vec!["Hello there. ", "How are you?"]);
    }

    #[test]
    fn test_lowercase_follow_is_not_a_boundary() {
        let matcher = cased();
        let sentences: Vec<_> = matcher.sentences("See fig. three here. Done").collect();
        assert_eq!(sentences, vec!["See fig. three here. ", "Done"]);
    }

    #[test]
    fn test_digit_follow_is_not_a_boundary() {
        let matcher = cased();
        let sentences: Vec<_> = matcher.sentences("Version 2. 5 items").collect();
        assert_eq!(sentences, vec!["Version 2. 5 items"]);
    }

    #[test]
    fn test_double_space_before_lowercase_gives_back_one_space() {
        let matcher = cased();
        let sentences: Vec<_> = matcher.sentences("One.  two").collect();
        assert_eq!(sentences, vec!["One. ", " two"]);
    }

    #[test]
    fn test_terminator_at_end_needs_following_text() {
        let matcher = cased();
        let sentences: Vec<_> = matcher.sentences("Only one. ").collect();
        assert_eq!(sentences, vec!["Only one. "]);
    }

    #[test]
    fn test_iterator_restarts() {
        let matcher = chinese();
        let text = "一。二。";
        let first: Vec<_> = matcher.sentences(text).collect();
        let second: Vec<_> = matcher.sentences(text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_regex_metacharacters_escaped() {
        let matcher = BoundaryMatcher::new(&[']', '^', '-'], TrailingSpace::Optional, false).unwrap();
        let sentences: Vec<_> = matcher.sentences("a]b^c-d").collect();
        assert_eq!(sentences, vec!["a]", "b^", "c-", "d"]);
    }
}
