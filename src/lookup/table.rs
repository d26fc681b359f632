//! Explicit character → reading tables.
//!
//! Dictionary files are plain text, one entry per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! 行	háng
//! 长	zhǎng
//! ```

use std::collections::HashMap;

use thiserror::Error;

use super::Lookup;

/// Malformed dictionary entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("line {line}: expected `<character>\\t<reading>`")]
    MissingSeparator { line: usize },

    #[error("line {line}: key {key:?} must be exactly one character")]
    BadKey { line: usize, key: String },

    #[error("line {line}: empty reading")]
    EmptyReading { line: usize },
}

/// Lookup over an in-memory table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLookup {
    entries: HashMap<char, String>,
}

impl TableLookup {
    /// Parse tab-separated dictionary text.
    ///
    /// Later entries for the same character replace earlier ones.
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        let mut entries = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (key, reading) = raw
                .split_once('\t')
                .ok_or(DictionaryError::MissingSeparator { line })?;
            let ch = single_char(key.trim()).ok_or_else(|| DictionaryError::BadKey {
                line,
                key: key.to_string(),
            })?;
            let reading = reading.trim();
            if reading.is_empty() {
                return Err(DictionaryError::EmptyReading { line });
            }
            entries.insert(ch, reading.to_string());
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> HashMap<char, String> {
        self.entries
    }
}

impl Lookup for TableLookup {
    fn reading(&self, ch: char) -> Option<&str> {
        self.entries.get(&ch).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for TableLookup {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(ch, r)| (ch, r.into())).collect(),
        }
    }
}

/// The only character of `s`, if it has exactly one.
pub(crate) fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
