// File: crates/layout-flip-core/src/text/mapping.rs

use std::{collections::HashMap, sync::OnceLock};

/// Physical key pairs between EN (US QWERTY) and UA (ЙЦУКЕН), in declaration order.
///
/// Order matters: the reverse table is built by walking these pairs front to back,
/// so on a value collision the later pair wins.
pub const LAYOUT_PAIRS: &[(char, char)] = &[
    // number row shift symbols (same physical keys)
    ('`', 'ґ'),
    ('~', 'Ґ'),
    ('!', '!'),
    ('@', '"'),
    ('#', '№'),
    ('$', ';'),
    ('%', '%'),
    ('^', ':'),
    ('&', '?'),
    ('*', '*'),
    ('(', '('),
    (')', ')'),
    // top letter row
    ('q', 'й'),
    ('w', 'ц'),
    ('e', 'у'),
    ('r', 'к'),
    ('t', 'е'),
    ('y', 'н'),
    ('u', 'г'),
    ('i', 'ш'),
    ('o', 'щ'),
    ('p', 'з'),
    ('[', 'х'),
    (']', 'ї'),
    ('Q', 'Й'),
    ('W', 'Ц'),
    ('E', 'У'),
    ('R', 'К'),
    ('T', 'Е'),
    ('Y', 'Н'),
    ('U', 'Г'),
    ('I', 'Ш'),
    ('O', 'Щ'),
    ('P', 'З'),
    ('{', 'Х'),
    ('}', 'Ї'),
    // home row
    ('a', 'ф'),
    ('s', 'і'),
    ('d', 'в'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    (';', 'ж'),
    ('\'', 'є'),
    ('A', 'Ф'),
    ('S', 'І'),
    ('D', 'В'),
    ('F', 'А'),
    ('G', 'П'),
    ('H', 'Р'),
    ('J', 'О'),
    ('K', 'Л'),
    ('L', 'Д'),
    (':', 'Ж'),
    ('"', 'Є'),
    // bottom row
    ('z', 'я'),
    ('x', 'ч'),
    ('c', 'с'),
    ('v', 'м'),
    ('b', 'и'),
    ('n', 'т'),
    ('m', 'ь'),
    (',', 'б'),
    ('.', 'ю'),
    ('/', '.'),
    ('Z', 'Я'),
    ('X', 'Ч'),
    ('C', 'С'),
    ('V', 'М'),
    ('B', 'И'),
    ('N', 'Т'),
    ('M', 'Ь'),
    ('<', 'Б'),
    ('>', 'Ю'),
    // collides with '/' on '.', wins in the reverse table
    ('?', '.'),
    // keys identical on both layouts
    ('\\', '\\'),
    ('|', '|'),
];

/// Immutable Latin <-> Cyrillic character table.
///
/// `forward` maps a Latin-layout char to the char produced by the same physical key
/// on the Cyrillic layout. `reverse` is derived from it and may hold fewer entries
/// when two forward keys share a value.
#[derive(Clone, Debug)]
pub struct CharacterMap {
    pairs: Box<[(char, char)]>,
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

impl CharacterMap {
    /// Builds a map from `(latin, cyrillic)` pairs.
    ///
    /// A repeated latin key keeps its first position but takes the later value.
    /// The reverse table inverts the resulting pairs in order, last one wins.
    #[must_use]
    pub fn from_pairs(pairs: &[(char, char)]) -> Self {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut ordered: Vec<(char, char)> = Vec::with_capacity(pairs.len());

        for &(latin, cyrillic) in pairs {
            if forward.insert(latin, cyrillic).is_some() {
                if let Some(slot) = ordered.iter_mut().find(|(k, _)| *k == latin) {
                    slot.1 = cyrillic;
                }
            } else {
                ordered.push((latin, cyrillic));
            }
        }

        let mut reverse = HashMap::with_capacity(ordered.len());
        for &(latin, cyrillic) in &ordered {
            reverse.insert(cyrillic, latin);
        }

        Self {
            pairs: ordered.into_boxed_slice(),
            forward,
            reverse,
        }
    }

    /// Process-wide map built from [`LAYOUT_PAIRS`] on first use.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<CharacterMap> = OnceLock::new();
        STANDARD.get_or_init(|| Self::from_pairs(LAYOUT_PAIRS))
    }

    #[must_use]
    pub fn lookup_forward(&self, ch: char) -> Option<char> {
        self.forward.get(&ch).copied()
    }

    #[must_use]
    pub fn lookup_reverse(&self, ch: char) -> Option<char> {
        self.reverse.get(&ch).copied()
    }

    #[must_use]
    pub fn len_forward(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn len_reverse(&self) -> usize {
        self.reverse.len()
    }

    /// Forward pairs in declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.pairs.iter().copied()
    }
}

impl Default for CharacterMap {
    fn default() -> Self {
        Self::standard().clone()
    }
}
