//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// How to fold text before matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct Folding {
    pub case_sensitive: bool,
    pub strip_diacritics: bool,
}

/// Fold a string into the char sequence the matcher works on.
///
/// Folding is strictly one char in, one char out, so a char index into the
/// folded sequence is also a char index into `value`. Match spans rely on this.
///
/// - "Café" → `['c', 'a', 'f', 'é']`
/// - "Café" with `strip_diacritics` → `['c', 'a', 'f', 'e']`
pub fn fold_chars(value: &str, folding: Folding) -> Vec<char> {
    value.chars().map(|c| fold_char(c, folding)).collect()
}

/// Fold a single char. Multi-char lowercase expansions keep only their first char.
pub fn fold_char(c: char, folding: Folding) -> char {
    let c = if folding.strip_diacritics { strip_diacritic(c) } else { c };
    if folding.case_sensitive {
        c
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Base letter of a precomposed char: NFD-decompose and keep the first scalar.
///
/// Combining marks on their own are left alone so folding never drops chars.
#[cfg(feature = "unicode-normalization")]
fn strip_diacritic(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    c.nfd().next().unwrap_or(c)
}

/// Without unicode-normalization (e.g. WASM builds) folding is case-only.
#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritic(c: char) -> char {
    c
}

/// Count whitespace-separated tokens.
pub fn token_count(value: &str) -> usize {
    value.split_whitespace().count()
}
