//! Punctuation substitution table
//!
//! Maps Western punctuation (with its trailing space or newline) onto a
//! locale's own conventions. Lookups are exact-string; applying the table to
//! running text is done by [`PunctuationTable::translate`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ProfileError, Result};

const ELLIPSIS: &str = "...";

/// One substitution rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationEntry {
    pub from: String,
    pub to: String,
}

/// Ordered punctuation substitution table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunctuationTable {
    entries: Vec<PunctuationEntry>,
    /// Entry indices, longest key first, ties in table order
    apply_order: Vec<usize>,
}

impl PunctuationTable {
    /// Build a table; keys must be non-empty and distinct
    pub fn new(entries: Vec<PunctuationEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.from.is_empty() {
                return Err(ProfileError::InvalidConfig(
                    "Empty punctuation key".to_string(),
                ));
            }
            if !seen.insert(entry.from.as_str()) {
                return Err(ProfileError::InvalidConfig(format!(
                    "Duplicate punctuation key: {:?}",
                    entry.from
                )));
            }
        }

        let mut apply_order: Vec<usize> = (0..entries.len()).collect();
        apply_order.sort_by_key(|&i| std::cmp::Reverse(entries[i].from.chars().count()));

        Ok(Self {
            entries,
            apply_order,
        })
    }

    /// Exact-string lookup
    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.from == from)
            .map(|entry| entry.to.as_str())
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.from.as_str(), entry.to.as_str()))
    }

    pub fn entries(&self) -> &[PunctuationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert the punctuation of `text` according to the table
    ///
    /// A trailing `"..."` is set aside and restored afterwards. Keys that end
    /// in a space also apply to their punctuation mark at the very end of the
    /// text, where the space is absent, unless the mark is doubled.
    pub fn translate(&self, text: &str) -> String {
        if text.is_empty() || self.entries.is_empty() {
            return text.to_string();
        }

        let (body, ellipsis_end) = match text.strip_suffix(ELLIPSIS) {
            Some(body) => (body, true),
            None => (text, false),
        };

        let mut result = body.to_string();
        for &i in &self.apply_order {
            let entry = &self.entries[i];
            if result.contains(entry.from.as_str()) {
                result = result.replace(entry.from.as_str(), &entry.to);
            }
        }

        if ellipsis_end {
            result.push_str(self.get(ELLIPSIS).unwrap_or(ELLIPSIS));
        }

        let mut tail = result.chars().rev();
        if let Some(last) = tail.next() {
            let doubled = tail.next() == Some(last);
            if !doubled {
                if let Some(to) = self.get(&format!("{last} ")) {
                    let replacement = to.trim_end().to_string();
                    result.truncate(result.len() - last.len_utf8());
                    result.push_str(&replacement);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(from: &str, to: &str) -> PunctuationEntry {
        PunctuationEntry {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn table() -> PunctuationTable {
        PunctuationTable::new(vec![
            entry(". ", "。"),
            entry("! ", "！"),
            entry(".\n", "。\n"),
            entry("% ", "%"),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_lookup() {
        let table = table();
        assert_eq!(table.get(". "), Some("。"));
        assert_eq!(table.get("."), None);
        assert_eq!(table.get(". x"), None);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = PunctuationTable::new(vec![entry(". ", "。"), entry(". ", "．")]);
        assert!(matches!(result, Err(ProfileError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = PunctuationTable::new(vec![entry("", "。")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_iter_preserves_table_order() {
        let table = table();
        let keys: Vec<_> = table.iter().map(|(from, _)| from).collect();
        assert_eq!(keys, vec![". ", "! ", ".\n", "% "]);
    }

    #[test]
    fn test_translate_inner_and_final_mark() {
        assert_eq!(table().translate("Hi. Bye."), "Hi。Bye。");
    }

    #[test]
    fn test_translate_newline_kept() {
        assert_eq!(table().translate("Line.\nNext"), "Line。\nNext");
    }

    #[test]
    fn test_translate_keeps_trailing_ellipsis() {
        assert_eq!(table().translate("Wait. Then..."), "Wait。Then...");
    }

    #[test]
    fn test_translate_doubled_final_mark_untouched() {
        assert_eq!(table().translate("Go!!"), "Go!!");
        assert_eq!(table().translate("Go!"), "Go！");
    }

    #[test]
    fn test_translate_single_mark() {
        assert_eq!(table().translate("."), "。");
    }

    #[test]
    fn test_translate_percent() {
        assert_eq!(table().translate("50% off"), "50%off");
        assert_eq!(table().translate("50%"), "50%");
    }

    #[test]
    fn test_translate_empty_and_without_table() {
        assert_eq!(table().translate(""), "");
        let empty = PunctuationTable::default();
        assert_eq!(empty.translate("Hi. Bye."), "Hi. Bye.");
    }

    #[test]
    fn test_longer_keys_apply_first() {
        let table = PunctuationTable::new(vec![entry("? ", "？"), entry("?! ", "？！")]).unwrap();
        assert_eq!(table.translate("Really?! Yes? No"), "Really？！Yes？No");
    }
}
