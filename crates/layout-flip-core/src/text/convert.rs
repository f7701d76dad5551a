// File: crates/layout-flip-core/src/text/convert.rs

use super::mapping::CharacterMap;

/// Applies a [`CharacterMap`] to text, one `char` at a time.
///
/// Forward lookups win over reverse ones; anything missing from both tables passes
/// through unchanged, so the output always has as many chars as the input.
#[derive(Clone, Copy, Debug)]
pub struct Converter<'a> {
    map: &'a CharacterMap,
}

impl<'a> Converter<'a> {
    #[must_use]
    pub const fn new(map: &'a CharacterMap) -> Self {
        Self { map }
    }

    #[must_use]
    pub const fn map(&self) -> &'a CharacterMap {
        self.map
    }

    #[must_use]
    pub fn convert_char(&self, ch: char) -> char {
        self.map
            .lookup_forward(ch)
            .or_else(|| self.map.lookup_reverse(ch))
            .unwrap_or(ch)
    }

    #[must_use]
    pub fn convert(&self, text: &str) -> String {
        // `text.len()` is in bytes; Cyrillic output is mostly 2 bytes per char.
        let mut out = String::with_capacity(text.len().saturating_mul(2));
        out.extend(text.chars().map(|ch| self.convert_char(ch)));
        out
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new(CharacterMap::standard())
    }
}

/// Converts text with the standard EN <-> UA table.
#[must_use]
pub fn convert_text(text: &str) -> String {
    Converter::default().convert(text)
}
