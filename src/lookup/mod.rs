//! Character → reading lookups.
//!
//! The annotator never talks to a transliteration library directly. It asks a
//! [`Lookup`] for the reading of each qualifying character, so dictionaries,
//! overrides and test tables can be swapped in without touching the alignment
//! code.
//!
//! | Lookup | Source of readings |
//! |--------|--------------------|
//! | [`PinyinLookup`] | `pinyin` crate data, plus [`LookupConfig::overrides`] |
//! | [`TableLookup`] | an explicit map, or a tab-separated dictionary file |
//!
//! # Example
//!
//! ```rust
//! use pinyin_annotate::lookup::{Lookup, LookupConfig, PinyinLookup};
//!
//! let lookup = PinyinLookup::new(LookupConfig::default());
//! assert_eq!(lookup.reading('中'), Some("zhōng"));
//! assert_eq!(lookup.reading('a'), None);
//! ```

pub mod builtin;
pub mod table;

use std::collections::HashMap;

use serde::Deserialize;

pub use builtin::PinyinLookup;
pub use table::{DictionaryError, TableLookup};

/// Resolves one character to its transliteration token.
///
/// Implementations return exactly one reading per character. Returning
/// `None` for a qualifying character is reported as an error by the
/// annotator rather than papered over with a blank token.
pub trait Lookup {
    fn reading(&self, ch: char) -> Option<&str>;
}

/// Closures with static readings work as ad-hoc lookups.
impl<F> Lookup for F
where
    F: Fn(char) -> Option<&'static str>,
{
    fn reading(&self, ch: char) -> Option<&str> {
        self(ch)
    }
}

/// Boxed lookups chosen at runtime can be passed straight to the annotator.
///
/// Borrowed trait objects need no impl of their own: the annotator takes
/// `L: Lookup + ?Sized`, so `&dyn Lookup` already fits.
impl Lookup for Box<dyn Lookup + '_> {
    fn reading(&self, ch: char) -> Option<&str> {
        (**self).reading(ch)
    }
}

/// How readings are spelled.
///
/// Tone marks over the vowel (`zhōng`) are the only supported style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ToneStyle {
    #[default]
    Marked,
}

/// Explicit lookup behaviour handed to [`PinyinLookup`].
///
/// Heteronyms are never expanded: the first (default) reading of each
/// character is used.
#[derive(Debug, Clone, Default)]
pub struct LookupConfig {
    pub style: ToneStyle,
    /// Readings that win over the built-in data.
    pub overrides: HashMap<char, String>,
}

impl LookupConfig {
    #[must_use]
    pub fn with_override(mut self, ch: char, reading: impl Into<String>) -> Self {
        self.overrides.insert(ch, reading.into());
        self
    }
}
