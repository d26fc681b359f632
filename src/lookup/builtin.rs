//! Lookup over the data bundled with the `pinyin` crate.

use std::collections::HashMap;

use pinyin::ToPinyin;

use super::{Lookup, LookupConfig, ToneStyle};

/// Default-reading lookup backed by the `pinyin` crate.
///
/// Overrides from [`LookupConfig`] are consulted first, so a user can pin a
/// reading (`行` → `háng`) without replacing the whole dictionary.
#[derive(Debug, Clone, Default)]
pub struct PinyinLookup {
    style: ToneStyle,
    overrides: HashMap<char, String>,
}

impl PinyinLookup {
    pub fn new(config: LookupConfig) -> Self {
        Self {
            style: config.style,
            overrides: config.overrides,
        }
    }

    /// Number of override entries in effect.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl Lookup for PinyinLookup {
    fn reading(&self, ch: char) -> Option<&str> {
        if let Some(reading) = self.overrides.get(&ch) {
            return Some(reading);
        }
        let pinyin = ch.to_pinyin()?;
        Some(match self.style {
            ToneStyle::Marked => pinyin.with_tone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_tone_marked_default_reading() {
        let lookup = PinyinLookup::default();
        assert_eq!(lookup.reading('中'), Some("zhōng"));
        assert_eq!(lookup.reading('你'), Some("nǐ"));
        assert_eq!(lookup.reading('好'), Some("hǎo"));
    }

    #[test]
    fn non_han_characters_have_no_reading() {
        let lookup = PinyinLookup::default();
        assert_eq!(lookup.reading('a'), None);
        assert_eq!(lookup.reading(' '), None);
        assert_eq!(lookup.reading('，'), None);
    }

    #[test]
    fn overrides_take_precedence() {
        let lookup = PinyinLookup::new(LookupConfig::default().with_override('好', "hào"));
        assert_eq!(lookup.reading('好'), Some("hào"));
        assert_eq!(lookup.reading('你'), Some("nǐ"));
        assert_eq!(lookup.override_count(), 1);
    }

    #[test]
    fn overrides_can_cover_characters_without_data() {
        let lookup = PinyinLookup::new(LookupConfig::default().with_override('x', "iks"));
        assert_eq!(lookup.reading('x'), Some("iks"));
    }
}
